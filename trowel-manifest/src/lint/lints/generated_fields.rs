use trowel_core::class_basename;

use crate::{
    Manifest,
    lint::{Diagnostic, Lint},
};

/// Lint that notes generated resources with no fields to scaffold from.
pub struct GeneratedFieldsLint;

impl Lint for GeneratedFieldsLint {
    fn name(&self) -> &'static str {
        "generated-fields"
    }

    fn description(&self) -> &'static str {
        "Check generated resources declare the fields to scaffold"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for resource in &manifest.resources {
            if resource.generated && resource.fields.is_empty() {
                diagnostics.push(
                    Diagnostic::info(
                        self.name(),
                        format!(
                            "resource '{}' is generated but declares no fields, its form and table will be empty",
                            resource.class
                        ),
                    )
                    .at(format!("{}.fields", class_basename(&resource.class))),
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
    fn test_generated_without_fields() {
        let manifest = parse_manifest(
            r#"
[[resource]]
class = "App\\Filament\\Resources\\PostResource"
model = "App\\Models\\Post"
generated = true
"#,
        );

        let mut diagnostics = Vec::new();
        GeneratedFieldsLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("PostResource.fields"));
    }

    #[test]
    fn test_generated_with_fields() {
        let manifest = parse_manifest(
            r#"
[[resource]]
class = "App\\Filament\\Resources\\PostResource"
model = "App\\Models\\Post"
generated = true

[[resource.fields]]
name = "title"
type = "text"
"#,
        );

        let mut diagnostics = Vec::new();
        GeneratedFieldsLint.check(&manifest, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
