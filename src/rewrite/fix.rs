//! ConfigureAwait code fix
//!
//! Resolves a diagnostic span to its await expression, then either corrects
//! the argument of an existing ConfigureAwait call to `false` or appends the
//! call to the awaited expression. The search here walks the await's full
//! subtree, wider than the detector's shallow hops, because the fix must
//! find the call wherever it lives in order to correct it. A span that no
//! longer resolves is a no-op, not an error.

use tree_sitter::Node;

use super::edit::Edit;
use crate::rules::{ConfigureAwaitRule, Diagnostic};
use crate::syntax::{named_children, SourceTree, Span};

/// Result of applying a rewrite to a tree
#[derive(Debug, Clone)]
pub struct RewriteResult {
    /// The rewritten tree (the input tree when nothing applied)
    pub tree: SourceTree,
    /// Whether a rewrite was applied
    pub changed: bool,
    /// The text edit that produced the new tree
    pub edit: Option<Edit>,
}

/// Inserts or corrects 'ConfigureAwait(false)' on an awaited call
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigureAwaitFix;

impl ConfigureAwaitFix {
    /// Code-action title shown by hosts
    pub const TITLE: &'static str = "Call 'ConfigureAwait(false)'";

    const ARGUMENTS: &'static str = "(false)";

    /// The single diagnostic id this fix can address
    pub fn rule_id() -> &'static str {
        ConfigureAwaitRule::DESCRIPTOR.id
    }

    /// Whether a diagnostic can be addressed by this fix
    pub fn applies_to(diagnostic: &Diagnostic) -> bool {
        diagnostic.rule_id == Self::rule_id()
    }

    /// Rewrite the await expression at `span`
    ///
    /// Returns the input tree unchanged when the span no longer resolves to
    /// an await expression.
    pub fn fix(tree: &SourceTree, span: Span) -> RewriteResult {
        let Some(await_expression) = Self::enclosing_await(tree, span) else {
            tracing::debug!(
                start = span.start,
                end = span.end,
                "span resolves to no await expression, skipping fix"
            );
            return RewriteResult {
                tree: tree.clone(),
                changed: false,
                edit: None,
            };
        };

        let edit = match Self::existing_configure_await(await_expression, tree)
            .and_then(|invocation| invocation.child_by_field_name("arguments"))
        {
            // The call exists somewhere in the chain: correct its argument,
            // whatever it was.
            Some(arguments) => Edit::replace(Span::of(&arguments), Self::ARGUMENTS),
            // No call in the chain: append one to the awaited expression.
            None => Self::append_edit(await_expression),
        };

        match tree.edit(edit.span, &edit.replacement) {
            Ok(new_tree) => RewriteResult {
                tree: new_tree,
                changed: true,
                edit: Some(edit),
            },
            Err(error) => {
                tracing::error!(%error, "reparse after rewrite failed, returning tree unchanged");
                RewriteResult {
                    tree: tree.clone(),
                    changed: false,
                    edit: None,
                }
            }
        }
    }

    /// Nearest enclosing await expression for a diagnostic span
    fn enclosing_await(tree: &SourceTree, span: Span) -> Option<Node<'_>> {
        let mut node = tree.find_node_at(span)?;
        loop {
            if node.kind() == "await_expression" {
                return Some(node);
            }
            node = node.parent()?;
        }
    }

    /// Invocation owning the last ConfigureAwait member access under the await
    fn existing_configure_await<'a>(
        await_expression: Node<'a>,
        tree: &SourceTree,
    ) -> Option<Node<'a>> {
        let mut last = None;
        find_last_configure_await(await_expression, tree, &mut last);
        last?.parent()
            .filter(|parent| parent.kind() == "invocation_expression")
    }

    /// Edit appending '.ConfigureAwait(false)' after the awaited expression
    fn append_edit(await_expression: Node<'_>) -> Edit {
        // The operand is the await's only named child; fall back to the end
        // of the whole expression if the tree is malformed there.
        let operand_end = named_children(await_expression)
            .last()
            .map_or(await_expression.end_byte(), |operand| operand.end_byte());
        Edit::insert(
            operand_end,
            format!(".{}{}", ConfigureAwaitRule::METHOD_NAME, Self::ARGUMENTS),
        )
    }
}

/// Pre-order scan for the last member access whose name is ConfigureAwait
fn find_last_configure_await<'a>(node: Node<'a>, tree: &SourceTree, last: &mut Option<Node<'a>>) {
    if node.kind() == "member_access_expression" {
        let matches = named_children(node).any(|child| {
            child.kind() == "identifier"
                && tree.node_text(child) == ConfigureAwaitRule::METHOD_NAME
        });
        if matches {
            *last = Some(node);
        }
    }
    for child in named_children(node) {
        find_last_configure_await(child, tree, last);
    }
}
