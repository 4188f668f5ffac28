//! awaitlint: syntax-level analysis and rewriting for C# async code
//!
//! This crate provides the core engine for two structural async checks:
//! - Syntax: source-owning tree-sitter tree with span lookup and text edits
//! - Rules: kind-registered detectors producing diagnostics in document order
//! - Rewrite: the 'ConfigureAwait(false)' fix bound to its diagnostic id
//!
//! The engine is pure and synchronous: hosts hand it an already-parsed tree
//! (or raw sources) and get back diagnostics or a rewritten tree. Project
//! loading, reporting, and scheduling are host concerns.

pub mod syntax;
pub mod rules;
pub mod rewrite;

// Re-exports for convenience
pub use syntax::{ParseError, SourceTree, Span};
pub use rules::{
    AnalysisOptions, AnalysisResult, AsyncPostfixRule, ConfigureAwaitRule, Diagnostic,
    FileDiagnostics, Rule, RuleDescriptor, RuleEngine, Severity,
};
pub use rewrite::{ConfigureAwaitFix, Edit, RewriteResult};
