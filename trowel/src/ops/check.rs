//! Check operation - manifest lints.

use std::path::Path;

use trowel_filament::ResourceClassGenerator;
use trowel_manifest::{Manifest, run_lints};

use crate::reports::{CheckReport, ResourceSummary};

/// Execute the check operation.
///
/// The manifest has already passed validation; this runs the lints and
/// summarizes what `make` would generate.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let generator = ResourceClassGenerator::new(manifest.generation.flags());

    let resources = manifest
        .to_specs()
        .iter()
        .map(|spec| ResourceSummary {
            class: spec.target().to_string(),
            model: spec.model().to_string(),
            pages: spec.pages().keys().cloned().collect(),
            partial_imports: generator.has_partial_imports(spec),
        })
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        diagnostics: run_lints(manifest),
        resources,
    }
}
