use trowel_core::class_basename;

use crate::{
    Manifest,
    lint::{Diagnostic, Lint},
};

/// Lint that notes resources with an infolist but no `view` page.
///
/// The infolist still renders inside a modal, which may be intended.
pub struct ViewPageLint;

impl Lint for ViewPageLint {
    fn name(&self) -> &'static str {
        "view-page"
    }

    fn description(&self) -> &'static str {
        "Check resources with a view operation register a view page"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for resource in &manifest.resources {
            if resource.view && !resource.simple && !resource.pages.contains_key("view") {
                diagnostics.push(
                    Diagnostic::info(
                        self.name(),
                        format!(
                            "resource '{}' has a view operation but no 'view' page, records open in a modal",
                            resource.class
                        ),
                    )
                    .at(format!("{}.pages", class_basename(&resource.class))),
                );
            }
        }
    }
}
