//! Make operation - resource classes written to disk.

use std::path::Path;

use eyre::{Context, Result};
use trowel_core::{FileRules, GeneratedFile};
use trowel_filament::{ResourceClassFile, ResourceClassGenerator, ResourceSpec};

use crate::reports::{GenerationResult, MakeReport, PreviewFile, WrittenFile};

/// Options for the make operation.
pub struct MakeOptions<'a> {
    /// Directory the class files are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to overwrite existing files.
    pub force: bool,
}

/// Execute the make operation.
///
/// Renders every resource and writes `<output_dir>/<Basename>.php`, or
/// collects the rendered files when previewing.
pub fn make(
    generator: &ResourceClassGenerator,
    specs: &[ResourceSpec],
    opts: MakeOptions<'_>,
) -> Result<MakeReport> {
    let rules = if opts.force {
        FileRules::always()
    } else {
        FileRules::create_once()
    };

    let result = if opts.dry_run {
        let files = specs
            .iter()
            .map(|spec| {
                let file = ResourceClassFile::new(generator, spec);
                PreviewFile {
                    path: file.path(opts.output_dir),
                    content: file.render(),
                }
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let mut files = Vec::with_capacity(specs.len());
        for spec in specs {
            let file = ResourceClassFile::new(generator, spec).with_rules(rules);
            let path = file.path(opts.output_dir);
            tracing::debug!(class = spec.target(), path = %path.display(), "writing resource");

            let result = file
                .write(opts.output_dir)
                .wrap_err_with(|| format!("Failed to generate '{}'", spec.target()))?;
            files.push(WrittenFile {
                class: spec.target().to_string(),
                path,
                result,
            });
        }
        GenerationResult::Written(files)
    };

    Ok(MakeReport {
        warnings: Vec::new(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use trowel_core::WriteResult;
    use trowel_filament::Page;

    use super::*;

    fn specs() -> Vec<ResourceSpec> {
        vec![
            ResourceSpec::builder("App\\Filament\\Resources\\PostResource", "App\\Models\\Post")
                .page("index", Page::new("App\\Filament\\Resources\\PostResource\\Pages\\ListPosts", "/"))
                .build(),
            ResourceSpec::builder("App\\Filament\\Resources\\TagResource", "App\\Models\\Tag")
                .page("index", Page::new("App\\Filament\\Resources\\TagResource\\Pages\\ManageTags", "/"))
                .simple(true)
                .build(),
        ]
    }

    fn options(dir: &Path, dry_run: bool, force: bool) -> MakeOptions<'_> {
        MakeOptions {
            output_dir: dir,
            dry_run,
            force,
        }
    }

    #[test]
    fn test_make_writes_every_resource() {
        let temp = TempDir::new().unwrap();
        let generator = ResourceClassGenerator::default();

        let report = make(&generator, &specs(), options(temp.path(), false, false)).unwrap();

        let GenerationResult::Written(files) = report.result else {
            panic!("expected written files");
        };
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.result == WriteResult::Written));

        let post = fs::read_to_string(temp.path().join("PostResource.php")).unwrap();
        assert!(post.starts_with("<?php\n"));
        assert!(temp.path().join("TagResource.php").exists());
    }

    #[test]
    fn test_make_keeps_existing_files_unless_forced() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("PostResource.php");
        fs::write(&path, "custom").unwrap();
        let generator = ResourceClassGenerator::default();

        let report = make(&generator, &specs(), options(temp.path(), false, false)).unwrap();
        let GenerationResult::Written(files) = report.result else {
            panic!("expected written files");
        };
        assert_eq!(files[0].result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom");

        make(&generator, &specs(), options(temp.path(), false, true)).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "custom");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let generator = ResourceClassGenerator::default();

        let report = make(&generator, &specs(), options(temp.path(), true, false)).unwrap();

        let GenerationResult::Preview(files) = report.result else {
            panic!("expected a preview");
        };
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].path, temp.path().join("TagResource.php"));
        assert!(files[1].content.contains("class TagResource extends Resource"));
        assert!(!temp.path().join("PostResource.php").exists());
    }
}
