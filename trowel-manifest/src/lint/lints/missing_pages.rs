use trowel_core::class_basename;

use crate::{
    Manifest,
    lint::{Diagnostic, Lint},
};

/// Lint that warns about resources without any page.
///
/// Such a resource registers no routes, so it never shows up in the panel.
pub struct MissingPagesLint;

impl Lint for MissingPagesLint {
    fn name(&self) -> &'static str {
        "missing-pages"
    }

    fn description(&self) -> &'static str {
        "Check every resource declares at least one page"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for resource in &manifest.resources {
            if resource.pages.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "resource '{}' has no pages and will not be reachable",
                            resource.class
                        ),
                    )
                    .at(class_basename(&resource.class)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::lints::parse_manifest;

    #[test]
    fn test_resource_without_pages() {
        let manifest = parse_manifest(
            r#"
[[resource]]
class = "App\\Filament\\Resources\\PostResource"
model = "App\\Models\\Post"
"#,
        );

        let mut diagnostics = Vec::new();
        MissingPagesLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].location.as_deref(), Some("PostResource"));
    }

    #[test]
    fn test_resource_with_pages() {
        let manifest = parse_manifest(
            r#"
[[resource]]
class = "App\\Filament\\Resources\\PostResource"
model = "App\\Models\\Post"

[resource.pages.index]
class = "App\\Filament\\Resources\\PostResource\\Pages\\ListPosts"
path = "/"
"#,
        );

        let mut diagnostics = Vec::new();
        MissingPagesLint.check(&manifest, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
