//! The generated resource class as a file on disk.

use std::path::{Path, PathBuf};

use trowel_core::{FileRules, GeneratedFile};
use trowel_php::PhpPrinter;

use crate::{generator::ResourceClassGenerator, spec::ResourceSpec};

/// `<dir>/<Basename>.php` holding the rendered resource class.
///
/// Existing files are kept unless the rules say otherwise.
#[derive(Debug)]
pub struct ResourceClassFile<'a> {
    generator: &'a ResourceClassGenerator,
    spec: &'a ResourceSpec,
    printer: PhpPrinter,
    rules: FileRules,
}

impl<'a> ResourceClassFile<'a> {
    pub fn new(generator: &'a ResourceClassGenerator, spec: &'a ResourceSpec) -> Self {
        Self {
            generator,
            spec,
            printer: PhpPrinter::new(),
            rules: FileRules::create_once(),
        }
    }

    /// Replace the write rules (`FileRules::always()` for `--force`).
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn spec(&self) -> &ResourceSpec {
        self.spec
    }
}

impl GeneratedFile for ResourceClassFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.php", self.spec.basename()))
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        self.generator.render(self.spec, &self.printer)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use trowel_core::WriteResult;

    use super::*;
    use crate::spec::Page;

    fn spec() -> ResourceSpec {
        ResourceSpec::builder("App\\Filament\\Resources\\PostResource", "App\\Models\\Post")
            .page(
                "index",
                Page::new("App\\Filament\\Resources\\PostResource\\Pages\\ListPosts", "/"),
            )
            .build()
    }

    #[test]
    fn test_path_uses_basename() {
        let generator = ResourceClassGenerator::default();
        let spec = spec();
        let file = ResourceClassFile::new(&generator, &spec);

        assert_eq!(
            file.path(Path::new("app/Filament/Resources")),
            PathBuf::from("app/Filament/Resources/PostResource.php")
        );
    }

    #[test]
    fn test_write_skips_existing_file_by_default() {
        let temp = TempDir::new().unwrap();
        let generator = ResourceClassGenerator::default();
        let spec = spec();
        let path = temp.path().join("PostResource.php");
        fs::write(&path, "<?php // edited by hand").unwrap();

        let result = ResourceClassFile::new(&generator, &spec)
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<?php // edited by hand");
    }

    #[test]
    fn test_write_with_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let generator = ResourceClassGenerator::default();
        let spec = spec();
        let path = temp.path().join("PostResource.php");
        fs::write(&path, "<?php // stale").unwrap();

        let result = ResourceClassFile::new(&generator, &spec)
            .with_rules(FileRules::always())
            .write(temp.path())
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?php\n\nnamespace App\\Filament\\Resources;\n"));
        assert!(content.contains("class PostResource extends Resource\n"));
    }
}
