use regex::Regex;
use std::sync::OnceLock;

/// A parsed unit of document structure.
///
/// Every variant carries `content`, the exact substring of input it was
/// scanned from; concatenating contents in document order reproduces the
/// source text. `Header` is the only variant whose content is derived
/// rather than captured: it is regenerated from title and level whenever
/// the level changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Fenced code block, including both 3-character delimiters.
    Code { content: String },
    /// Front-matter block delimited like a fence, holding `key: value`
    /// lines.
    FrontMatter { content: String },
    /// Catch-all text span.
    Paragraph { content: String },
    /// Run of spaces, tabs and newlines.
    Whitespace { content: String },
    /// ATX header.
    Header {
        title: String,
        level: usize,
        content: String,
    },
    /// Single `[label]: target` reference-link definition line.
    RefLink { content: String },
}

impl Node {
    pub fn code(content: impl Into<String>) -> Self {
        Node::Code {
            content: content.into(),
        }
    }

    pub fn front_matter(content: impl Into<String>) -> Self {
        Node::FrontMatter {
            content: content.into(),
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Node::Paragraph {
            content: content.into(),
        }
    }

    pub fn whitespace(content: impl Into<String>) -> Self {
        Node::Whitespace {
            content: content.into(),
        }
    }

    pub fn ref_link(content: impl Into<String>) -> Self {
        Node::RefLink {
            content: content.into(),
        }
    }

    /// Creates a header, deriving its textual content from title and
    /// level.
    pub fn header(title: impl Into<String>, level: usize) -> Self {
        let title = title.into();
        let content = header_content(&title, level);
        Node::Header {
            title,
            level,
            content,
        }
    }

    /// The exact text this node serializes to.
    pub fn content(&self) -> &str {
        match self {
            Node::Code { content }
            | Node::FrontMatter { content }
            | Node::Paragraph { content }
            | Node::Whitespace { content }
            | Node::Header { content, .. }
            | Node::RefLink { content } => content,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Node::Header { .. })
    }

    pub fn is_ref_link(&self) -> bool {
        matches!(self, Node::RefLink { .. })
    }

    /// Adds `count` to a header's level and regenerates its content.
    /// Levels saturate at zero. Other node kinds are unaffected.
    pub fn indent(&mut self, count: isize) {
        if let Node::Header {
            title,
            level,
            content,
        } = self
        {
            *level = level.saturating_add_signed(count);
            *content = header_content(title, *level);
        }
    }

    /// Extracts `key: value` pairs from a front-matter block, one per
    /// line; the key is everything before the first `": "`. Empty for
    /// other node kinds.
    pub fn variables(&self) -> Vec<(String, String)> {
        static VARIABLE_LINE: OnceLock<Regex> = OnceLock::new();
        let variable_line = VARIABLE_LINE
            .get_or_init(|| Regex::new(r"(?m)^(.*?): (.*)$").expect("invalid variable regex"));

        match self {
            Node::FrontMatter { content } => variable_line
                .captures_iter(content)
                .map(|m| (m[1].to_string(), m[2].to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn header_content(title: &str, level: usize) -> String {
    format!("{} {}\n", "#".repeat(level), title)
}
