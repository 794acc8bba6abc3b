use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a trowel.toml file with both raw content and parsed manifest.
pub struct TrowelToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl TrowelToml {
    /// Open and parse a trowel.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory relative paths in the manifest are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }

    /// Output directory from `[generation] output`, resolved against the manifest.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.manifest
            .generation
            .output
            .as_ref()
            .map(|output| self.base_dir().join(output))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
[generation]
output = "app/Filament/Resources"

[[resource]]
class = "App\\Filament\\Resources\\PostResource"
model = "App\\Models\\Post"
"#;

    #[test]
    fn test_open_resolves_output_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trowel.toml");
        fs::write(&path, MANIFEST).unwrap();

        let file = TrowelToml::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.content(), MANIFEST);
        assert_eq!(file.manifest().resources.len(), 1);
        assert_eq!(
            file.output_dir(),
            Some(temp.path().join("app/Filament/Resources"))
        );
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = TrowelToml::open(temp.path().join("trowel.toml")).err().unwrap();

        assert!(matches!(*err, crate::Error::Io { .. }));
    }
}
