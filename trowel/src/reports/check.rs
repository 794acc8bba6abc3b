//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;
use trowel_manifest::{Diagnostic, Severity};

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Lint diagnostics, in lint order.
    pub diagnostics: Vec<Diagnostic>,
    /// Resources `make` would generate.
    pub resources: Vec<ResourceSummary>,
}

/// One resource of the manifest.
#[derive(Debug, Serialize)]
pub struct ResourceSummary {
    pub class: String,
    pub model: String,
    /// Page route names, in registration order.
    pub pages: Vec<String>,
    /// Whether the class imports its pages through their namespace.
    pub partial_imports: bool,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let text = match &diag.location {
                Some(loc) => format!("{}: {}\n  --> {}", diag.severity, diag.message, loc),
                None => format!("{}: {}", diag.severity, diag.message),
            };
            match diag.severity {
                Severity::Error | Severity::Warning => out.warning(&text),
                Severity::Info => out.preformatted(&text),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section(&format!(
            "{} resource{}",
            self.resources.len(),
            if self.resources.len() == 1 { "" } else { "s" }
        ));
        for resource in &self.resources {
            let pages = if resource.pages.is_empty() {
                "no pages".to_string()
            } else {
                resource.pages.join(", ")
            };
            out.list_item(&format!("{} ({}) [{}]", resource.class, resource.model, pages));
        }
    }
}
