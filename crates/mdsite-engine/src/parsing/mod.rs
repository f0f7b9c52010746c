//! Markdown-dialect parsing: a cursor over the raw text, one scan
//! function per node kind, and the context-sensitive dispatch loop that
//! drives them.

pub mod cursor;
pub mod preprocess;
mod scanner;

use cursor::Cursor;
use scanner::{
    is_ref_link_line, is_whitespace, scan_code, scan_front_matter, scan_header, scan_paragraph,
    scan_ref_link, scan_whitespace,
};

use crate::document::Document;

/// Parses `text` into a [`Document`].
///
/// With `use_front_matter` set, a `---` block at the very start of the
/// document is consumed as front matter and its `key: value` variables
/// are substituted into the rest of the buffer (every `{{ page.<key> }}`
/// occurrence) before scanning resumes. Front matter is recognized at
/// most once, before any other node has been produced.
pub fn parse_markdown(text: &str, use_front_matter: bool) -> Document {
    let mut doc = Document::new();
    if let Some(rest) = scan_into(&mut doc, text, use_front_matter) {
        scan_into(&mut doc, &rest, false);
    }
    doc
}

/// Runs the scan loop over `text`, appending nodes to `doc`.
///
/// Returns the substituted remainder when a front-matter block was taken;
/// the caller restarts scanning over it with front matter disabled.
fn scan_into(doc: &mut Document, text: &str, use_front_matter: bool) -> Option<String> {
    let mut cur = Cursor::new(text);

    while let Some(c) = cur.peek() {
        if is_whitespace(c) {
            doc.add_child(scan_whitespace(&mut cur));
            continue;
        }

        // Front matter is legal only at document start.
        if use_front_matter && doc.is_empty() && c == '-' && cur.peek_n(3) == "---" {
            let node = scan_front_matter(&mut cur);
            let variables = node.variables();
            let rest = preprocess::substitute_variables(cur.rest(), &variables);
            doc.add_child(node);
            return Some(rest);
        }

        if (c == '-' || c == '~' || c == '`') && matches!(cur.peek_n(3), "---" | "~~~" | "```") {
            doc.add_child(scan_code(&mut cur));
            continue;
        }

        if c == '#' {
            doc.add_child(scan_header(&mut cur));
            continue;
        }

        if c == '[' && is_ref_link_line(cur.peek_while(|it| it != '\n')) {
            doc.add_child(scan_ref_link(&mut cur));
            continue;
        }

        doc.add_child(scan_paragraph(&mut cur));
    }

    None
}
