pub mod document;
pub mod io;
pub mod parsing;
pub mod slug;

// Re-export key types for easier usage
pub use document::{Document, DocumentError, Node, NodeEntry, NodeId};
pub use parsing::parse_markdown;
pub use slug::slugify;
