//! Make command report data structures.

use std::path::PathBuf;

use trowel_core::WriteResult;

use super::output::{Output, Report};

/// Report data from resource generation.
#[derive(Debug)]
pub struct MakeReport {
    /// Lint warnings about the manifest.
    pub warnings: Vec<String>,
    /// Files written or previewed.
    pub result: GenerationResult,
}

/// Result of resource generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk (or skipped because they exist).
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A resource class handled on disk.
#[derive(Debug)]
pub struct WrittenFile {
    /// Fully qualified resource class.
    pub class: String,
    pub path: PathBuf,
    pub result: WriteResult,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

impl MakeReport {
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

impl Report for MakeReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Written(files) => render_written(out, files),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

fn render_written(out: &mut dyn Output, files: &[WrittenFile]) {
    let (written, skipped): (Vec<_>, Vec<_>) = files
        .iter()
        .partition(|file| file.result == WriteResult::Written);

    if !written.is_empty() {
        out.section(&format!("Generated ({})", written.len()));
        for file in &written {
            out.added_item(&format!("{} ({})", file.path.display(), file.class));
        }
    }

    if !skipped.is_empty() {
        if !written.is_empty() {
            out.newline();
        }
        out.section("Skipped, already exist (use --force to overwrite)");
        for file in &skipped {
            out.list_item(&file.path.display().to_string());
        }
    }
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path.display().to_string());
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!(
        "{} file{} would be generated",
        files.len(),
        if files.len() == 1 { "" } else { "s" }
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordedOutput;

    fn written(name: &str, result: WriteResult) -> WrittenFile {
        WrittenFile {
            class: format!("App\\Filament\\Resources\\{}", name),
            path: PathBuf::from(format!("out/{}.php", name)),
            result,
        }
    }

    #[test]
    fn test_render_written_and_skipped() {
        let report = MakeReport {
            warnings: vec!["resource 'TagResource' has no pages".to_string()],
            result: GenerationResult::Written(vec![
                written("PostResource", WriteResult::Written),
                written("TagResource", WriteResult::Skipped),
            ]),
        };

        let mut out = RecordedOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: resource 'TagResource' has no pages",
                "",
                "Generated (1):",
                "  + out/PostResource.php (App\\Filament\\Resources\\PostResource)",
                "",
                "Skipped, already exist (use --force to overwrite):",
                "  - out/TagResource.php",
            ]
        );
    }

    #[test]
    fn test_render_preview_summary() {
        let report = MakeReport {
            warnings: Vec::new(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: PathBuf::from("out/PostResource.php"),
                content: "<?php".to_string(),
            }]),
        };

        let mut out = RecordedOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── out/PostResource.php ──",
                "<?php",
                "── Summary ──",
                "1 file would be generated",
            ]
        );
    }
}
