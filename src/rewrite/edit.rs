//! Text edit representation for fixes

use std::fmt;

use crate::syntax::Span;

/// A single text replacement at a byte range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Range being replaced
    pub span: Span,
    /// Replacement text
    pub replacement: String,
}

impl Edit {
    /// Replace a range with new text
    pub fn replace(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }

    /// Insert text at an offset
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::replace(Span::new(offset, offset), text)
    }

    /// Delete a range
    pub fn delete(span: Span) -> Self {
        Self::replace(span, "")
    }

    /// Apply this edit to a source string
    pub fn apply(&self, source: &str) -> String {
        let mut result = String::with_capacity(source.len() + self.replacement.len());
        result.push_str(&source[..self.span.start]);
        result.push_str(&self.replacement);
        result.push_str(&source[self.span.end..]);
        result
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} -> {:?}", self.span.start, self.span.end, self.replacement)
    }
}
