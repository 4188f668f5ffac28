//! Source-owning syntax tree
//!
//! A `SourceTree` is an immutable value pairing the source text with its
//! parsed tree. Edits splice the text and reparse incrementally, so the new
//! tree shares every subtree the edit did not touch with the old one.

use once_cell::sync::Lazy;
use tree_sitter::{InputEdit, Language, Node, Parser, Point, Tree};

use super::types::{ParseError, Span};

static CSHARP: Lazy<Language> = Lazy::new(|| tree_sitter_c_sharp::LANGUAGE.into());

/// A C# source file and its parsed syntax tree
#[derive(Debug, Clone)]
pub struct SourceTree {
    source: String,
    tree: Tree,
}

impl SourceTree {
    /// Parse C# source into a tree
    pub fn parse(source: impl Into<String>) -> Result<Self, ParseError> {
        let source = source.into();
        let mut parser = Parser::new();
        parser.set_language(&CSHARP)?;
        let tree = parser.parse(&source, None).ok_or(ParseError::NoTree)?;
        Ok(Self { source, tree })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Text covered by a node
    pub fn node_text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }

    /// Innermost named node covering a span
    pub fn find_node_at(&self, span: Span) -> Option<Node<'_>> {
        self.root().named_descendant_for_byte_range(span.start, span.end)
    }

    /// Row/column position of a byte offset
    pub fn position_at(&self, byte: usize) -> Point {
        position_in(&self.source, byte)
    }

    /// Replace a byte range with new text, producing a new tree
    ///
    /// The old tree is informed of the edit before reparsing, so tree-sitter
    /// reuses every subtree outside the edited range. `self` is untouched.
    pub fn edit(&self, span: Span, replacement: &str) -> Result<Self, ParseError> {
        let mut source = String::with_capacity(self.source.len() + replacement.len());
        source.push_str(&self.source[..span.start]);
        source.push_str(replacement);
        source.push_str(&self.source[span.end..]);

        let new_end_byte = span.start + replacement.len();
        let input_edit = InputEdit {
            start_byte: span.start,
            old_end_byte: span.end,
            new_end_byte,
            start_position: position_in(&self.source, span.start),
            old_end_position: position_in(&self.source, span.end),
            new_end_position: position_in(&source, new_end_byte),
        };

        let mut old_tree = self.tree.clone();
        old_tree.edit(&input_edit);

        let mut parser = Parser::new();
        parser.set_language(&CSHARP)?;
        let tree = parser.parse(&source, Some(&old_tree)).ok_or(ParseError::NoTree)?;
        Ok(Self { source, tree })
    }
}

/// Named children of a node, in document order
pub fn named_children<'a>(node: Node<'a>) -> impl Iterator<Item = Node<'a>> {
    (0..node.named_child_count()).filter_map(move |i| node.named_child(i))
}

/// Last named child of the given kind, if any
pub fn last_named_child_of_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    named_children(node).filter(|child| child.kind() == kind).last()
}

fn position_in(source: &str, byte: usize) -> Point {
    let prefix = &source[..byte];
    let row = prefix.bytes().filter(|&b| b == b'\n').count();
    let column = byte - prefix.rfind('\n').map_or(0, |newline| newline + 1);
    Point { row, column }
}
