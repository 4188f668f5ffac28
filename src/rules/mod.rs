//! Detection rules
//!
//! Each rule is a stateless value type carrying static metadata, the node
//! kinds it wants visited, and a pure detector. The engine walks a tree once
//! and dispatches nodes by kind.

mod types;
mod engine;
mod configure_await;
mod async_postfix;

pub use types::{
    AnalysisOptions, AnalysisResult, Diagnostic, FileDiagnostics, RuleDescriptor, Severity,
};
pub use engine::{Rule, RuleEngine};
pub use configure_await::ConfigureAwaitRule;
pub use async_postfix::AsyncPostfixRule;
