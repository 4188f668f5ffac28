//! Source spans and parse errors

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tree_sitter::Node;

/// A half-open byte range into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering a node
    pub fn of(node: &Node) -> Self {
        Self::new(node.start_byte(), node.end_byte())
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, byte: usize) -> bool {
        byte >= self.start && byte < self.end
    }
}

/// Failure to produce a syntax tree
#[derive(Debug, Error)]
pub enum ParseError {
    /// The C# grammar could not be loaded into the parser
    #[error("failed to load C# grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The parser returned no tree for the input
    #[error("parser produced no syntax tree")]
    NoTree,
}
