//! Rule metadata and diagnostic types

use serde::Serialize;

use crate::syntax::Span;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Static metadata describing a rule
#[derive(Debug, Clone, Copy)]
pub struct RuleDescriptor {
    /// Stable diagnostic identifier
    pub id: &'static str,
    /// Short rule title
    pub title: &'static str,
    /// Message attached to each diagnostic
    pub message_format: &'static str,
    /// What the rule enforces
    pub description: &'static str,
    /// Rule category
    pub category: &'static str,
    /// Severity of reported diagnostics
    pub severity: Severity,
}

/// A reported rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Identifier of the rule that produced this diagnostic
    pub rule_id: &'static str,
    /// Severity inherited from the rule
    pub severity: Severity,
    /// Source range the diagnostic is anchored to
    pub span: Span,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Build a diagnostic from a rule's descriptor at a span
    pub fn from_descriptor(descriptor: &RuleDescriptor, span: Span) -> Self {
        Self {
            rule_id: descriptor.id,
            severity: descriptor.severity,
            span,
            message: descriptor.message_format.to_string(),
        }
    }
}

/// Options for multi-source analysis
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Analyze sources in parallel
    pub parallel: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Diagnostics for one analyzed source
#[derive(Debug, Clone, Serialize)]
pub struct FileDiagnostics {
    /// Host-supplied source name
    pub file: String,
    /// Diagnostics in document order
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of analyzing a set of sources
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Per-file diagnostics (unparseable sources are skipped)
    pub files: Vec<FileDiagnostics>,
    /// Number of sources successfully parsed and analyzed
    pub files_analyzed: usize,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}
