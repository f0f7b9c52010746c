//! Document model: an ordered sequence of parsed nodes plus the query and
//! editing operations used to rewrite a document before serializing.

mod node;

pub use node::Node;

use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::slug::slugify;

/// Stable identifier for a node within a [`Document`].
///
/// Ids survive inserts, removals and [`Document::extend`]; they are never
/// reused or reassigned.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeId(Uuid);

impl NodeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Errors for id-based document lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("node {0} is not part of this document")]
    NotFound(NodeId),
    #[error("node {0} has no neighbour in that direction")]
    OutOfRange(NodeId),
}

/// A node together with its stable id.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeEntry {
    id: NodeId,
    node: Node,
}

impl NodeEntry {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &Node {
        &self.node
    }
}

/// An ordered sequence of nodes with id-based editing operations.
///
/// The document is the sole owner of its nodes. Insertion order is
/// document order, except that [`Document::to_text`] serializes
/// reference-link nodes after everything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    nodes: Vec<NodeEntry>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a node and returns its id.
    pub fn add_child(&mut self, node: Node) -> NodeId {
        let id = NodeId::new();
        self.nodes.push(NodeEntry { id, node });
        id
    }

    /// All entries in document order.
    pub fn nodes(&self) -> &[NodeEntry] {
        &self.nodes
    }

    /// The node behind `id`, if present.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.position(id).map(|ix| &self.nodes[ix].node)
    }

    /// First node in document order satisfying `pred`.
    pub fn find_first(&self, pred: impl Fn(&Node) -> bool) -> Option<NodeId> {
        self.nodes.iter().find(|e| pred(&e.node)).map(|e| e.id)
    }

    /// First node satisfying `pred`, searching from `start` (inclusive).
    pub fn find_first_from(
        &self,
        start: NodeId,
        pred: impl Fn(&Node) -> bool,
    ) -> Result<Option<NodeId>, DocumentError> {
        let ix = self.position(start).ok_or(DocumentError::NotFound(start))?;
        Ok(self.nodes[ix..].iter().find(|e| pred(&e.node)).map(|e| e.id))
    }

    /// Serializes the document.
    ///
    /// Reference-link nodes are emitted after all other nodes, keeping
    /// their relative order; everything else keeps document order. Node
    /// contents carry their own line breaks, so no separators are added.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in self.nodes.iter().filter(|e| !e.node.is_ref_link()) {
            out.push_str(entry.node.content());
        }
        for entry in self.nodes.iter().filter(|e| e.node.is_ref_link()) {
            out.push_str(entry.node.content());
        }
        out
    }

    /// Shifts every header by `count` levels, regenerating their content.
    /// Non-header nodes are unaffected.
    pub fn indent(&mut self, count: isize) {
        for entry in &mut self.nodes {
            entry.node.indent(count);
        }
    }

    /// Builds a table-of-contents block: a fixed two-line banner followed
    /// by one bullet per header in document order, indented three spaces
    /// per level and linking to the header's slug.
    pub fn toc(&self) -> String {
        let mut toc = String::from("Table of Contents\n=================\n");
        for entry in &self.nodes {
            if let Node::Header { title, level, .. } = &entry.node {
                let indent = "   ".repeat(*level);
                let slug = slugify(title);
                toc.push_str(&format!("{indent}* [{title}](#{slug})\n"));
            }
        }
        toc
    }

    /// Appends all of `other`'s entries in order, ids preserved.
    pub fn extend(&mut self, other: Document) {
        self.nodes.extend(other.nodes);
    }

    /// Inserts `node` immediately before `start`.
    pub fn insert_node(&mut self, start: NodeId, node: Node) -> Result<NodeId, DocumentError> {
        let ix = self.position(start).ok_or(DocumentError::NotFound(start))?;
        let id = NodeId::new();
        self.nodes.insert(ix, NodeEntry { id, node });
        Ok(id)
    }

    /// Inserts every node in `nodes` immediately before `start`, keeping
    /// their relative order.
    pub fn insert_nodes(
        &mut self,
        start: NodeId,
        nodes: Vec<Node>,
    ) -> Result<Vec<NodeId>, DocumentError> {
        let ix = self.position(start).ok_or(DocumentError::NotFound(start))?;
        let entries: Vec<NodeEntry> = nodes
            .into_iter()
            .map(|node| NodeEntry {
                id: NodeId::new(),
                node,
            })
            .collect();
        let ids = entries.iter().map(|e| e.id).collect();
        self.nodes.splice(ix..ix, entries);
        Ok(ids)
    }

    /// Removes the node behind `id`. Absent ids are a no-op.
    pub fn remove_node(&mut self, id: NodeId) {
        if let Some(ix) = self.position(id) {
            self.nodes.remove(ix);
        }
    }

    /// Removes every listed node; absent ids are silently ignored.
    pub fn remove_nodes(&mut self, ids: &[NodeId]) {
        self.nodes.retain(|e| !ids.contains(&e.id));
    }

    /// The contiguous run of entries from `a` (inclusive) up to `b`
    /// (exclusive). Empty when `a` is at or after `b`.
    pub fn slice(&self, a: NodeId, b: NodeId) -> Result<&[NodeEntry], DocumentError> {
        let ia = self.position(a).ok_or(DocumentError::NotFound(a))?;
        let ib = self.position(b).ok_or(DocumentError::NotFound(b))?;
        if ia >= ib {
            return Ok(&[]);
        }
        Ok(&self.nodes[ia..ib])
    }

    /// The node immediately after `id`.
    pub fn next_node(&self, id: NodeId) -> Result<NodeId, DocumentError> {
        let ix = self.position(id).ok_or(DocumentError::NotFound(id))?;
        self.nodes
            .get(ix + 1)
            .map(|e| e.id)
            .ok_or(DocumentError::OutOfRange(id))
    }

    /// The node immediately before `id`.
    pub fn previous_node(&self, id: NodeId) -> Result<NodeId, DocumentError> {
        let ix = self.position(id).ok_or(DocumentError::NotFound(id))?;
        ix.checked_sub(1)
            .map(|prev| self.nodes[prev].id)
            .ok_or(DocumentError::OutOfRange(id))
    }

    fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> (Document, Vec<NodeId>) {
        let mut doc = Document::new();
        let ids = vec![
            doc.add_child(Node::header("One", 1)),
            doc.add_child(Node::paragraph("first paragraph\n")),
            doc.add_child(Node::whitespace("\n")),
            doc.add_child(Node::paragraph("second paragraph\n")),
        ];
        (doc, ids)
    }

    /// An id allocated by a different document, guaranteed absent.
    fn foreign_id() -> NodeId {
        let mut other = Document::new();
        other.add_child(Node::whitespace("\n"))
    }

    #[test]
    fn add_child_preserves_order() {
        let (doc, ids) = sample();
        let order: Vec<NodeId> = doc.nodes().iter().map(|e| e.id()).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn find_first_by_kind() {
        let (doc, ids) = sample();
        assert_eq!(doc.find_first(|n| n.is_header()), Some(ids[0]));
        assert_eq!(doc.find_first(|n| n.is_ref_link()), None);
    }

    #[test]
    fn find_first_from_searches_inclusive() {
        let (doc, ids) = sample();
        let found = doc
            .find_first_from(ids[1], |n| matches!(n, Node::Paragraph { .. }))
            .unwrap();
        assert_eq!(found, Some(ids[1]));
    }

    #[test]
    fn find_first_from_unknown_start_fails() {
        let (doc, _) = sample();
        let absent = foreign_id();
        assert_eq!(
            doc.find_first_from(absent, |_| true),
            Err(DocumentError::NotFound(absent))
        );
    }

    #[test]
    fn to_text_concatenates_in_order() {
        let (doc, _) = sample();
        assert_eq!(
            doc.to_text(),
            "# One\nfirst paragraph\n\nsecond paragraph\n"
        );
    }

    #[test]
    fn to_text_moves_ref_links_last() {
        let mut doc = Document::new();
        doc.add_child(Node::ref_link("[a]: https://example.org/a\n"));
        doc.add_child(Node::paragraph("body\n"));
        doc.add_child(Node::ref_link("[b]: https://example.org/b\n"));
        assert_eq!(
            doc.to_text(),
            "body\n[a]: https://example.org/a\n[b]: https://example.org/b\n"
        );
    }

    #[test]
    fn indent_shifts_every_header() {
        let mut doc = Document::new();
        doc.add_child(Node::header("A", 1));
        doc.add_child(Node::paragraph("text\n"));
        doc.add_child(Node::header("B", 2));
        doc.indent(1);
        assert_eq!(doc.to_text(), "## A\ntext\n### B\n");
    }

    #[test]
    fn indent_inverse_restores_headers() {
        let (mut doc, _) = sample();
        let before = doc.to_text();
        doc.indent(2);
        doc.indent(-2);
        assert_eq!(doc.to_text(), before);
    }

    #[test]
    fn toc_lists_headers_with_slugs() {
        let mut doc = Document::new();
        doc.add_child(Node::header("Getting Started", 1));
        doc.add_child(Node::header("First Steps", 2));
        assert_eq!(
            doc.toc(),
            "Table of Contents\n\
             =================\n\
             \x20  * [Getting Started](#getting-started)\n\
             \x20     * [First Steps](#first-steps)\n"
        );
    }

    #[test]
    fn extend_appends_and_keeps_ids() {
        let (mut doc, _) = sample();
        let mut other = Document::new();
        let appended = other.add_child(Node::paragraph("tail\n"));
        doc.extend(other);
        assert_eq!(doc.len(), 5);
        assert_eq!(doc.nodes().last().unwrap().id(), appended);
        assert!(doc.node(appended).is_some());
    }

    #[test]
    fn insert_node_before_start() {
        let (mut doc, ids) = sample();
        let inserted = doc
            .insert_node(ids[1], Node::paragraph("inserted\n"))
            .unwrap();
        assert_eq!(doc.next_node(inserted).unwrap(), ids[1]);
        assert_eq!(doc.previous_node(inserted).unwrap(), ids[0]);
    }

    #[test]
    fn insert_nodes_keeps_relative_order() {
        let (mut doc, ids) = sample();
        let inserted = doc
            .insert_nodes(
                ids[1],
                vec![Node::paragraph("x\n"), Node::paragraph("y\n")],
            )
            .unwrap();
        assert_eq!(doc.next_node(inserted[0]).unwrap(), inserted[1]);
        assert_eq!(doc.next_node(inserted[1]).unwrap(), ids[1]);
    }

    #[test]
    fn insert_node_unknown_start_leaves_document_unmodified() {
        let (mut doc, _) = sample();
        let before = doc.clone();
        let absent = foreign_id();
        assert_eq!(
            doc.insert_node(absent, Node::paragraph("x\n")),
            Err(DocumentError::NotFound(absent))
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn remove_node_drops_entry() {
        let (mut doc, ids) = sample();
        doc.remove_node(ids[1]);
        assert_eq!(doc.len(), 3);
        assert!(doc.node(ids[1]).is_none());
    }

    #[test]
    fn remove_node_absent_is_noop() {
        let (mut doc, _) = sample();
        doc.remove_node(foreign_id());
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn remove_nodes_ignores_absent_ids() {
        let (mut doc, ids) = sample();
        doc.remove_nodes(&[ids[0], foreign_id(), ids[2]]);
        let remaining: Vec<NodeId> = doc.nodes().iter().map(|e| e.id()).collect();
        assert_eq!(remaining, vec![ids[1], ids[3]]);
    }

    #[test]
    fn slice_is_inclusive_exclusive() {
        let (doc, ids) = sample();
        let entries = doc.slice(ids[1], ids[3]).unwrap();
        let sliced: Vec<NodeId> = entries.iter().map(|e| e.id()).collect();
        assert_eq!(sliced, vec![ids[1], ids[2]]);
    }

    #[test]
    fn slice_reversed_endpoints_is_empty() {
        let (doc, ids) = sample();
        assert!(doc.slice(ids[3], ids[1]).unwrap().is_empty());
        assert!(doc.slice(ids[1], ids[1]).unwrap().is_empty());
    }

    #[test]
    fn slice_unknown_endpoint_fails() {
        let (doc, ids) = sample();
        let absent = foreign_id();
        assert_eq!(
            doc.slice(ids[0], absent),
            Err(DocumentError::NotFound(absent))
        );
        assert_eq!(
            doc.slice(absent, ids[0]),
            Err(DocumentError::NotFound(absent))
        );
    }

    #[test]
    fn next_node_at_end_is_out_of_range() {
        let (doc, ids) = sample();
        assert_eq!(doc.next_node(ids[1]).unwrap(), ids[2]);
        assert_eq!(
            doc.next_node(ids[3]),
            Err(DocumentError::OutOfRange(ids[3]))
        );
    }

    #[test]
    fn previous_node_at_start_is_out_of_range() {
        let (doc, ids) = sample();
        assert_eq!(doc.previous_node(ids[1]).unwrap(), ids[0]);
        assert_eq!(
            doc.previous_node(ids[0]),
            Err(DocumentError::OutOfRange(ids[0]))
        );
    }

    #[test]
    fn next_node_unknown_id_fails() {
        let (doc, _) = sample();
        let absent = foreign_id();
        assert_eq!(doc.next_node(absent), Err(DocumentError::NotFound(absent)));
        assert_eq!(
            doc.previous_node(absent),
            Err(DocumentError::NotFound(absent))
        );
    }
}
