//! Rule engine
//!
//! Rules register the node kinds they want visited; analysis is a single
//! pre-order traversal dispatching each node to the rules registered for its
//! kind. Detection is pure and holds no shared mutable state, so independent
//! sources are analyzed in parallel with rayon.

use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tree_sitter::Node;

use super::async_postfix::AsyncPostfixRule;
use super::configure_await::ConfigureAwaitRule;
use super::types::{AnalysisOptions, AnalysisResult, Diagnostic, FileDiagnostics, RuleDescriptor};
use crate::syntax::{named_children, SourceTree};

/// A registered rule
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    ConfigureAwait(ConfigureAwaitRule),
    AsyncPostfix(AsyncPostfixRule),
}

impl Rule {
    /// Static metadata for this rule
    pub fn descriptor(&self) -> &'static RuleDescriptor {
        match self {
            Rule::ConfigureAwait(_) => &ConfigureAwaitRule::DESCRIPTOR,
            Rule::AsyncPostfix(_) => &AsyncPostfixRule::DESCRIPTOR,
        }
    }

    /// Node kinds this rule wants visited
    pub fn node_kinds(&self) -> &'static [&'static str] {
        match self {
            Rule::ConfigureAwait(rule) => rule.node_kinds(),
            Rule::AsyncPostfix(rule) => rule.node_kinds(),
        }
    }

    fn detect(&self, node: Node<'_>, tree: &SourceTree) -> Vec<Diagnostic> {
        match self {
            Rule::ConfigureAwait(rule) => rule.detect(node, tree),
            Rule::AsyncPostfix(rule) => rule.detect(node, tree),
        }
    }
}

/// Kind-indexed rule registry and tree analyzer
pub struct RuleEngine {
    by_kind: FxHashMap<&'static str, SmallVec<[Rule; 2]>>,
}

impl RuleEngine {
    /// Engine with no rules registered
    pub fn new() -> Self {
        Self {
            by_kind: FxHashMap::default(),
        }
    }

    /// Engine with both built-in rules registered
    pub fn with_default_rules() -> Self {
        let mut engine = Self::new();
        engine.register(Rule::ConfigureAwait(ConfigureAwaitRule));
        engine.register(Rule::AsyncPostfix(AsyncPostfixRule));
        engine
    }

    /// Register a rule under every node kind it declares
    pub fn register(&mut self, rule: Rule) {
        for &kind in rule.node_kinds() {
            self.by_kind.entry(kind).or_default().push(rule);
        }
    }

    /// Metadata for every registered rule, ordered by id
    pub fn descriptors(&self) -> Vec<&'static RuleDescriptor> {
        let mut descriptors: Vec<&'static RuleDescriptor> = Vec::new();
        for rules in self.by_kind.values() {
            for rule in rules {
                let descriptor = rule.descriptor();
                if !descriptors.iter().any(|seen| seen.id == descriptor.id) {
                    descriptors.push(descriptor);
                }
            }
        }
        descriptors.sort_by_key(|descriptor| descriptor.id);
        descriptors
    }

    /// Analyze one tree, returning diagnostics in document order
    pub fn analyze(&self, tree: &SourceTree) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        self.visit(tree.root(), tree, &mut diagnostics);
        diagnostics
    }

    fn visit(&self, node: Node<'_>, tree: &SourceTree, out: &mut Vec<Diagnostic>) {
        if let Some(rules) = self.by_kind.get(node.kind()) {
            for rule in rules {
                out.extend(rule.detect(node, tree));
            }
        }
        for child in named_children(node) {
            self.visit(child, tree, out);
        }
    }

    /// Parse and analyze a set of (name, source) pairs
    ///
    /// Unparseable sources are logged and skipped; they never fail the run.
    pub fn analyze_sources(
        &self,
        sources: &[(String, String)],
        options: &AnalysisOptions,
    ) -> AnalysisResult {
        let start = Instant::now();

        let files: Vec<FileDiagnostics> = if options.parallel {
            sources
                .par_iter()
                .filter_map(|(file, source)| self.analyze_source(file, source))
                .collect()
        } else {
            sources
                .iter()
                .filter_map(|(file, source)| self.analyze_source(file, source))
                .collect()
        };

        AnalysisResult {
            files_analyzed: files.len(),
            duration_ms: start.elapsed().as_millis() as u64,
            files,
        }
    }

    fn analyze_source(&self, file: &str, source: &str) -> Option<FileDiagnostics> {
        match SourceTree::parse(source) {
            Ok(tree) => Some(FileDiagnostics {
                file: file.to_string(),
                diagnostics: self.analyze(&tree),
            }),
            Err(error) => {
                tracing::warn!(file, %error, "skipping unparseable source");
                None
            }
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_source_has_no_diagnostics() {
        let engine = RuleEngine::with_default_rules();
        let tree = SourceTree::parse(
            "class C { async Task GetAsync() { await Get().ConfigureAwait(false); } }",
        )
        .unwrap();

        assert!(engine.analyze(&tree).is_empty());
    }

    #[test]
    fn test_diagnostics_in_document_order() {
        let engine = RuleEngine::with_default_rules();
        let tree = SourceTree::parse(
            "class C { async Task Get() { await Fetch(); } }",
        )
        .unwrap();

        let diagnostics = engine.analyze(&tree);
        let ids: Vec<&str> = diagnostics.iter().map(|d| d.rule_id).collect();
        // Method name precedes the await in the source.
        assert_eq!(ids, vec!["R02", "R01"]);
        assert!(diagnostics[0].span.start < diagnostics[1].span.start);
    }

    #[test]
    fn test_empty_engine_reports_nothing() {
        let engine = RuleEngine::new();
        let tree = SourceTree::parse("class C { async Task Get() { await Fetch(); } }").unwrap();
        assert!(engine.analyze(&tree).is_empty());
    }

    #[test]
    fn test_descriptors_ordered_by_id() {
        let engine = RuleEngine::with_default_rules();
        let ids: Vec<&str> = engine.descriptors().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["R01", "R02"]);
    }

    #[test]
    fn test_analyze_sources_parallel() {
        let engine = RuleEngine::with_default_rules();
        let sources: Vec<(String, String)> = (0..8)
            .map(|i| {
                (
                    format!("service_{i}.cs"),
                    "class C { async Task Get() { await Fetch(); } }".to_string(),
                )
            })
            .collect();

        let result = engine.analyze_sources(&sources, &AnalysisOptions::default());
        assert_eq!(result.files_analyzed, 8);
        assert!(result.files.iter().all(|file| file.diagnostics.len() == 2));
    }

    #[test]
    fn test_analyze_sources_sequential_matches_parallel() {
        let engine = RuleEngine::with_default_rules();
        let sources = vec![(
            "service.cs".to_string(),
            "class C { async Task Get() { await Fetch(); } }".to_string(),
        )];

        let parallel = engine.analyze_sources(&sources, &AnalysisOptions { parallel: true });
        let sequential = engine.analyze_sources(&sources, &AnalysisOptions { parallel: false });
        assert_eq!(parallel.files[0].diagnostics, sequential.files[0].diagnostics);
    }
}
