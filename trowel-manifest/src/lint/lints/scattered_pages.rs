use trowel_core::{class_basename, shared_namespace};

use crate::{
    Manifest,
    lint::{Diagnostic, Lint},
};

/// Lint that notes resources whose pages cannot share one namespace import.
///
/// With `partial_imports` on, pages spread over several namespaces make the
/// resource import every page class individually, along with every action
/// and column class instead of their namespaces.
pub struct ScatteredPagesLint;

impl Lint for ScatteredPagesLint {
    fn name(&self) -> &'static str {
        "scattered-pages"
    }

    fn description(&self) -> &'static str {
        "Check pages share a namespace when partial imports are enabled"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        if !manifest.generation.partial_imports {
            return;
        }

        for resource in &manifest.resources {
            if resource.pages.is_empty() {
                continue;
            }

            let classes = resource.pages.values().map(|page| page.class.as_str());
            if shared_namespace(classes).is_none() {
                diagnostics.push(
                    Diagnostic::info(
                        self.name(),
                        format!(
                            "pages of '{}' live in different namespaces, partial imports are disabled for it",
                            resource.class
                        ),
                    )
                    .at(format!("{}.pages", class_basename(&resource.class))),
                );
            }
        }
    }
}
