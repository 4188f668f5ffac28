//! Missing 'ConfigureAwait(false)' detection
//!
//! Structural check per await expression: the awaited call chain must end in
//! a call to ConfigureAwait. Only direct children are inspected at each hop
//! (await -> invocation -> member access -> identifier), so same-named
//! identifiers nested in unrelated subexpressions never match. The call's
//! argument is deliberately not inspected: ConfigureAwait(true) passes.

use tree_sitter::Node;

use super::types::{Diagnostic, RuleDescriptor, Severity};
use crate::syntax::{last_named_child_of_kind, named_children, SourceTree, Span};

/// Detects awaited calls that never call ConfigureAwait
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigureAwaitRule;

impl ConfigureAwaitRule {
    pub const DESCRIPTOR: RuleDescriptor = RuleDescriptor {
        id: "R01",
        title: "Missing 'ConfigureAwait(false)' call",
        message_format: "Missing 'ConfigureAwait(false)' call",
        description: "Missing 'ConfigureAwait(false)' call",
        category: "async",
        severity: Severity::Warning,
    };

    /// Method name the awaited chain must end in
    pub const METHOD_NAME: &'static str = "ConfigureAwait";

    /// Node kinds this rule registers for
    pub fn node_kinds(&self) -> &'static [&'static str] {
        &["await_expression"]
    }

    /// Check one await expression
    pub fn detect(&self, node: Node<'_>, tree: &SourceTree) -> Vec<Diagnostic> {
        // Hop 1: the await must wrap an invocation at all.
        let Some(invocation) = last_named_child_of_kind(node, "invocation_expression") else {
            return vec![Diagnostic::from_descriptor(&Self::DESCRIPTOR, Span::of(&node))];
        };

        // Hop 2: the invocation target must be a member-access chain segment.
        let Some(member_access) = last_named_child_of_kind(invocation, "member_access_expression")
        else {
            return vec![Diagnostic::from_descriptor(&Self::DESCRIPTOR, Span::of(&node))];
        };

        // Hop 3: the accessed member must be the ConfigureAwait identifier.
        let has_configure_await = named_children(member_access)
            .any(|child| child.kind() == "identifier" && tree.node_text(child) == Self::METHOD_NAME);
        if has_configure_await {
            return Vec::new();
        }

        vec![Diagnostic::from_descriptor(&Self::DESCRIPTOR, Span::of(&invocation))]
    }
}
