use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, &self.render(), &self.rules())
    }
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfMissing => {
            if path.exists() {
                tracing::debug!(path = %path.display(), "file exists, skipping");
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Always overwrite an existing file.
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Only write the file when it doesn't exist yet.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (`--force`)
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app").join("Filament").join("Post.php");

        write_file(&path, "<?php").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "<?php");
    }

    struct Php {
        content: &'static str,
        rules: FileRules,
    }

    impl GeneratedFile for Php {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("PostResource.php")
        }

        fn rules(&self) -> FileRules {
            self.rules
        }

        fn render(&self) -> String {
            self.content.to_string()
        }
    }

    #[test]
    fn test_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("PostResource.php");
        fs::write(&path, "original").unwrap();

        let file = Php {
            content: "updated",
            rules: FileRules::always(),
        };

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_create_once_creates_new() {
        let temp = TempDir::new().unwrap();
        let file = Php {
            content: "new content",
            rules: FileRules::create_once(),
        };

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("PostResource.php")).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_create_once_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("PostResource.php");
        fs::write(&path, "original").unwrap();

        let file = Php {
            content: "should not write",
            rules: FileRules::create_once(),
        };

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_generated_file_uses_base_dir() {
        struct Stub;

        impl GeneratedFile for Stub {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("Stub.php")
            }

            fn rules(&self) -> FileRules {
                FileRules::always()
            }

            fn render(&self) -> String {
                "<?php\n".to_string()
            }
        }

        let temp = TempDir::new().unwrap();
        assert_eq!(Stub.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("Stub.php")).unwrap(),
            "<?php\n"
        );
    }
}
