//! Lints over a parsed manifest.
//!
//! Validation rejects manifests that cannot be generated at all. Lints flag
//! manifests that generate fine but probably not the way they were meant to.

mod diagnostic;
pub mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub use lints::{GeneratedFieldsLint, MissingPagesLint, ScatteredPagesLint, ViewPageLint};

use crate::Manifest;

/// A lint that checks the manifest for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs a set of lints over a manifest.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(MissingPagesLint),
                Box::new(ViewPageLint),
                Box::new(ScatteredPagesLint),
                Box::new(GeneratedFieldsLint),
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

    /// Names and descriptions of every lint that will run.
    pub fn lint_info(&self) -> Vec<(&'static str, &'static str)> {
        self.lints.iter().map(|l| (l.name(), l.description())).collect()
    }

    /// Run every lint, in order.
    pub fn run(&self, manifest: &Manifest) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(manifest, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the default lints over a manifest.
pub fn run_lints(manifest: &Manifest) -> Vec<Diagnostic> {
    Linter::new().run(manifest)
}
