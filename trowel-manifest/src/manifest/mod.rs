//! Manifest types and parsing for trowel.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

use indexmap::IndexMap;
pub use file::TrowelToml;
use serde::{Deserialize, Deserializer};
use trowel_filament::{Field, FieldKind, GenerationFlags, Page, ResourceSpec};
pub use validate::ParseContext;

/// Root manifest for trowel.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Settings shared by every resource
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Resources to generate, one `[[resource]]` table each
    #[serde(default, rename = "resource")]
    pub resources: Vec<ResourceConfig>,
}

impl Manifest {
    /// Descriptions of every resource, in manifest order.
    pub fn to_specs(&self) -> Vec<ResourceSpec> {
        self.resources.iter().map(ResourceConfig::to_spec).collect()
    }

    /// Find a resource by its class name.
    pub fn resource(&self, class: &str) -> Option<&ResourceConfig> {
        self.resources.iter().find(|r| r.class == class)
    }
}

/// `[generation]` settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Import shared namespaces instead of every class
    pub partial_imports: bool,
    /// List form components inline
    pub embed_schemas: bool,
    /// Default output directory, relative to the manifest
    pub output: Option<PathBuf>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            partial_imports: true,
            embed_schemas: true,
            output: None,
        }
    }
}

impl GenerationConfig {
    pub fn flags(&self) -> GenerationFlags {
        GenerationFlags {
            partial_imports: self.partial_imports,
            embed_schemas: self.embed_schemas,
        }
    }
}

/// A `[[resource]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
    /// Fully qualified resource class
    pub class: String,
    /// Fully qualified Eloquent model
    pub model: String,
    /// Fully qualified cluster the resource belongs to
    #[serde(default)]
    pub cluster: Option<String>,
    /// Whether the resource has a view page and an infolist
    #[serde(default)]
    pub view: bool,
    /// Whether the resource was generated from the model's columns
    #[serde(default)]
    pub generated: bool,
    /// Whether the model uses soft deletes
    #[serde(default)]
    pub soft_deletes: bool,
    /// Whether the resource manages records from a single page
    #[serde(default)]
    pub simple: bool,
    /// Pages keyed by route name
    #[serde(default)]
    pub pages: IndexMap<String, PageConfig>,
    /// Model fields used to scaffold the form and table
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl ResourceConfig {
    /// Convert to the generator's description.
    ///
    /// Expects a validated manifest; invalid names panic in
    /// [`ResourceSpec`]'s builder.
    pub fn to_spec(&self) -> ResourceSpec {
        let mut builder = ResourceSpec::builder(&self.class, &self.model)
            .view(self.view)
            .generated(self.generated)
            .soft_deletes(self.soft_deletes)
            .simple(self.simple)
            .fields(self.fields.iter().map(|f| Field::new(&f.name, f.kind).required(f.required)));

        if let Some(cluster) = &self.cluster {
            builder = builder.cluster(cluster);
        }

        for (key, page) in &self.pages {
            builder = builder.page(key, Page::new(&page.class, &page.path));
        }

        builder.build()
    }
}

/// A `[resource.pages.<route>]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    /// Fully qualified page class
    pub class: String,
    /// Route path relative to the resource
    pub path: String,
}

/// A `[[resource.fields]]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,
    #[serde(rename = "type", deserialize_with = "deserialize_kind")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

fn deserialize_kind<'de, D>(deserializer: D) -> std::result::Result<FieldKind, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(|e| {
        let valid: Vec<&str> = FieldKind::ALL.iter().map(FieldKind::as_str).collect();
        D::Error::custom(format!("{}, expected one of: {}", e, valid.join(", ")))
    })
}
