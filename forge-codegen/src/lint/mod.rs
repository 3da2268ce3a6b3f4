//! Definition lints.
//!
//! Lints never stop serialization; they point at definitions whose document
//! would silently drop a section or be rejected by the platform.

mod diagnostic;
pub mod lints;

pub use diagnostic::{Diagnostic, Severity};
use itopforge_core::Escaping;
use itopforge_model::ClassDefinition;
pub use lints::{FieldLint, LifecycleLint, MarkupLint, MenuLint};
use tracing::debug;

/// A lint that checks a class definition for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the definition and add any diagnostics.
    fn check(&self, def: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs a set of lints over a definition.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the built-in lints, judging markup for `escaping`.
    pub fn new(escaping: Escaping) -> Self {
        Self {
            lints: vec![
                Box::new(LifecycleLint),
                Box::new(FieldLint),
                Box::new(MenuLint),
                Box::new(MarkupLint::new(escaping)),
            ],
        }
    }

    /// Create a linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint, returning diagnostics ordered by severity.
    pub fn run(&self, def: &ClassDefinition) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(def, &mut diagnostics);
        }
        diagnostics.sort_by_key(|d| d.severity);
        debug!(class = %def.name, count = diagnostics.len(), "lint finished");
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(Escaping::default())
    }
}

/// Lint a definition that will be serialized with default escaping.
pub fn lint(def: &ClassDefinition) -> Vec<Diagnostic> {
    Linter::default().run(def)
}

/// Lint a definition that will be serialized with the given escaping.
pub fn lint_with(def: &ClassDefinition, escaping: Escaping) -> Vec<Diagnostic> {
    Linter::new(escaping).run(def)
}

/// Returns true if any diagnostic is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity.is_error())
}
