//! 'Async' postfix naming check
//!
//! Methods whose declared return type starts with `Task` should carry the
//! Async postfix. The match is textual: the type is never resolved, so both
//! `Task` and `Task<T>` are covered, and a user type whose name happens to
//! start with `Task` also triggers the rule.

use tree_sitter::Node;

use super::types::{Diagnostic, RuleDescriptor, Severity};
use crate::syntax::{SourceTree, Span};

/// Detects Task-returning methods without the Async name postfix
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncPostfixRule;

impl AsyncPostfixRule {
    pub const DESCRIPTOR: RuleDescriptor = RuleDescriptor {
        id: "R02",
        title: "'Async' postfix is missing",
        message_format: "Rename method to have 'Async' postfix",
        description: "Methods that return Task or Task<T> should have 'Async' postfix in name declaration",
        category: "async",
        severity: Severity::Warning,
    };

    const TASK_PREFIX: &'static str = "Task";
    const ASYNC_POSTFIX: &'static str = "Async";

    /// Node kinds this rule registers for
    pub fn node_kinds(&self) -> &'static [&'static str] {
        &["method_declaration"]
    }

    /// Check one method declaration
    pub fn detect(&self, node: Node<'_>, tree: &SourceTree) -> Vec<Diagnostic> {
        let Some(return_type) = node.child_by_field_name("returns") else {
            return Vec::new();
        };
        let Some(name) = node.child_by_field_name("name") else {
            return Vec::new();
        };

        let returns_task = tree.node_text(return_type).starts_with(Self::TASK_PREFIX);
        if returns_task && !tree.node_text(name).ends_with(Self::ASYNC_POSTFIX) {
            return vec![Diagnostic::from_descriptor(&Self::DESCRIPTOR, Span::of(&name))];
        }

        Vec::new()
    }
}
