//! Scan functions, one per node kind. Each consumes exactly the span of
//! the node it returns; dispatch between them lives in the parse loop,
//! since the grammar is context-sensitive.

use regex::Regex;
use std::sync::OnceLock;

use super::cursor::Cursor;
use crate::document::Node;

pub(crate) fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n'
}

/// A line is blank when it is empty or all-whitespace.
pub(crate) fn is_blank(line: &str) -> bool {
    line.chars().all(is_whitespace)
}

/// True when a line is a `[label]: target` reference-link definition.
pub(crate) fn is_ref_link_line(line: &str) -> bool {
    static REF_LINK_LINE: OnceLock<Regex> = OnceLock::new();
    let ref_link_line =
        REF_LINK_LINE.get_or_init(|| Regex::new(r"^\[.+]: .+").expect("invalid ref-link regex"));
    ref_link_line.is_match(line)
}

/// Scans a maximal run of spaces, tabs and newlines.
pub(crate) fn scan_whitespace(cur: &mut Cursor<'_>) -> Node {
    Node::whitespace(cur.read_while(is_whitespace))
}

/// Scans a fenced span: the 3-character opening delimiter through the
/// matching closing delimiter, or to end of input when unterminated.
fn scan_fenced(cur: &mut Cursor<'_>) -> String {
    let separator = cur.read_n(3).to_string();
    let mut content = separator.clone();

    while !cur.eof() {
        if cur.peek_n(3) == separator {
            content.push_str(cur.read_n(3));
            return content;
        }
        if let Some(c) = cur.read() {
            content.push(c);
        }
    }
    content
}

/// Scans a fenced code block.
pub(crate) fn scan_code(cur: &mut Cursor<'_>) -> Node {
    Node::code(scan_fenced(cur))
}

/// Scans a front-matter block: a fenced span plus the newline ending the
/// closing delimiter line.
pub(crate) fn scan_front_matter(cur: &mut Cursor<'_>) -> Node {
    let mut content = scan_fenced(cur);
    if cur.peek() == Some('\n')
        && let Some(c) = cur.read()
    {
        content.push(c);
    }
    Node::front_matter(content)
}

/// Scans an ATX header: the `#` run is the level, following whitespace is
/// skipped, the rest of the line is the title.
pub(crate) fn scan_header(cur: &mut Cursor<'_>) -> Node {
    let level = cur.read_while(|c| c == '#').len();
    cur.read_while(is_whitespace);
    let title = cur.read_while(|c| c != '\n').to_string();
    cur.read(); // trailing newline, absent at end of input
    Node::header(title, level)
}

/// Scans one reference-link definition line plus its newline.
pub(crate) fn scan_ref_link(cur: &mut Cursor<'_>) -> Node {
    let line = cur.read_while(|c| c != '\n');
    let content = format!("{line}\n");
    cur.read();
    Node::ref_link(content)
}

/// Scans a paragraph: consumes up to and including the newline before a
/// blank line, or to end of input. The blank line itself is left for the
/// next whitespace scan.
pub(crate) fn scan_paragraph(cur: &mut Cursor<'_>) -> Node {
    let mut content = String::new();
    while let Some(c) = cur.read() {
        content.push(c);
        if c == '\n' && is_blank(cur.peek_while(|it| it != '\n')) {
            break;
        }
    }
    Node::paragraph(content)
}
