//! Syntax tree substrate
//!
//! Wraps the external tree-sitter C# grammar behind a source-owning tree
//! value with span lookup, node helpers, and text-edit reparsing. The crate
//! consumes the grammar; it does not own or extend it.

mod types;
mod tree;

pub use types::{ParseError, Span};
pub use tree::{last_named_child_of_kind, named_children, SourceTree};
