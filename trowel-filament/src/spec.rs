//! The description of a resource to generate.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use trowel_core::{
    class_basename, extract_namespace, is_valid_fqn, is_valid_identifier,
    strip_leading_separator,
};

/// A page registered by the resource (`'index' => ListPosts::route('/')`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Fully qualified page class.
    pub class: String,
    /// Route path relative to the resource.
    pub path: String,
}

impl Page {
    pub fn new(class: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            path: path.into(),
        }
    }
}

/// Kind of an entity field, driving the scaffolded form component and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Email,
    LongText,
    Boolean,
    Integer,
    Decimal,
    Date,
    DateTime,
}

impl FieldKind {
    /// All kinds, in the order they are documented.
    pub const ALL: [FieldKind; 8] = [
        Self::Text,
        Self::Email,
        Self::LongText,
        Self::Boolean,
        Self::Integer,
        Self::Decimal,
        Self::Date,
        Self::DateTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::LongText => "long_text",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::DateTime => "date_time",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type '{0}'")]
pub struct UnknownFieldKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownFieldKind(s.to_string()))
    }
}

/// A field of the entity, the input of the scaffolded form and table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    /// Create an optional field.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// Everything needed to assemble one resource class.
///
/// Built through [`ResourceSpec::builder`], which checks the invariants the
/// assembly relies on. A violated invariant is a programming error upstream
/// and panics.
///
/// # Example
///
/// ```
/// use trowel_filament::{Page, ResourceSpec};
///
/// let spec = ResourceSpec::builder("App\\Filament\\Resources\\PostResource", "App\\Models\\Post")
///     .page("index", Page::new("App\\Filament\\Resources\\PostResource\\Pages\\ListPosts", "/"))
///     .soft_deletes(true)
///     .build();
///
/// assert_eq!(spec.basename(), "PostResource");
/// assert_eq!(spec.model_basename(), "Post");
/// assert!(spec.is_soft_deletable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    target: String,
    model: String,
    pages: IndexMap<String, Page>,
    cluster: Option<String>,
    view: bool,
    generated: bool,
    soft_deletes: bool,
    simple: bool,
    fields: Vec<Field>,
}

impl ResourceSpec {
    /// Start describing the resource `target` for the entity `model`.
    pub fn builder(target: impl Into<String>, model: impl Into<String>) -> ResourceSpecBuilder {
        ResourceSpecBuilder {
            spec: ResourceSpec {
                target: target.into(),
                model: model.into(),
                pages: IndexMap::new(),
                cluster: None,
                view: false,
                generated: false,
                soft_deletes: false,
                simple: false,
                fields: Vec::new(),
            },
        }
    }

    /// Fully qualified name of the class to generate.
    pub fn target(&self) -> &str {
        strip_leading_separator(&self.target)
    }

    pub fn basename(&self) -> &str {
        class_basename(&self.target)
    }

    pub fn namespace(&self) -> &str {
        extract_namespace(&self.target)
    }

    /// Fully qualified name of the entity.
    pub fn model(&self) -> &str {
        strip_leading_separator(&self.model)
    }

    pub fn model_basename(&self) -> &str {
        class_basename(&self.model)
    }

    /// Fully qualified name of the cluster, if any.
    pub fn cluster(&self) -> Option<&str> {
        self.cluster.as_deref().map(strip_leading_separator)
    }

    pub fn cluster_basename(&self) -> Option<&str> {
        self.cluster.as_deref().map(class_basename)
    }

    pub fn has_cluster(&self) -> bool {
        self.cluster.is_some()
    }

    pub fn has_view_operation(&self) -> bool {
        self.view
    }

    /// Informational: the resource was generated from the model's schema.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn is_soft_deletable(&self) -> bool {
        self.soft_deletes
    }

    pub fn is_simple(&self) -> bool {
        self.simple
    }

    /// Pages keyed by route name, in registration order.
    pub fn pages(&self) -> &IndexMap<String, Page> {
        &self.pages
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Builder for [`ResourceSpec`].
#[derive(Debug, Clone)]
pub struct ResourceSpecBuilder {
    spec: ResourceSpec,
}

impl ResourceSpecBuilder {
    /// Register a page. Registering the same key twice replaces the page in place.
    pub fn page(mut self, key: impl Into<String>, page: Page) -> Self {
        self.spec.pages.insert(key.into(), page);
        self
    }

    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.spec.cluster = Some(cluster.into());
        self
    }

    pub fn view(mut self, view: bool) -> Self {
        self.spec.view = view;
        self
    }

    pub fn generated(mut self, generated: bool) -> Self {
        self.spec.generated = generated;
        self
    }

    pub fn soft_deletes(mut self, soft_deletes: bool) -> Self {
        self.spec.soft_deletes = soft_deletes;
        self
    }

    pub fn simple(mut self, simple: bool) -> Self {
        self.spec.simple = simple;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.spec.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.spec.fields.extend(fields);
        self
    }

    /// Finish the description.
    ///
    /// # Panics
    ///
    /// Panics when a name is not a valid fully qualified name, a page has an
    /// empty key or path, the cluster is the resource itself, or a field
    /// name is not an identifier.
    pub fn build(self) -> ResourceSpec {
        let spec = self.spec;

        assert!(
            is_valid_fqn(&spec.target),
            "invalid resource class name '{}'",
            spec.target
        );
        assert!(
            is_valid_fqn(&spec.model),
            "invalid model class name '{}'",
            spec.model
        );

        for (key, page) in &spec.pages {
            assert!(!key.is_empty(), "page route name must not be empty");
            assert!(
                is_valid_fqn(&page.class),
                "invalid class name '{}' for page '{}'",
                page.class,
                key
            );
            assert!(!page.path.is_empty(), "page '{}' has an empty route path", key);
        }

        if let Some(cluster) = spec.cluster() {
            assert!(is_valid_fqn(cluster), "invalid cluster class name '{}'", cluster);
            assert!(
                cluster != spec.target(),
                "resource '{}' cannot be its own cluster",
                spec.target()
            );
        }

        for field in &spec.fields {
            assert!(
                is_valid_identifier(&field.name),
                "invalid field name '{}'",
                field.name
            );
        }

        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_resource() -> ResourceSpecBuilder {
        ResourceSpec::builder("App\\Filament\\Resources\\PostResource", "App\\Models\\Post")
    }

    #[test]
    fn test_accessors() {
        let spec = post_resource()
            .cluster("\\App\\Filament\\Clusters\\Blog")
            .view(true)
            .generated(true)
            .build();

        assert_eq!(spec.target(), "App\\Filament\\Resources\\PostResource");
        assert_eq!(spec.namespace(), "App\\Filament\\Resources");
        assert_eq!(spec.cluster(), Some("App\\Filament\\Clusters\\Blog"));
        assert_eq!(spec.cluster_basename(), Some("Blog"));
        assert!(spec.has_cluster());
        assert!(spec.has_view_operation());
        assert!(spec.is_generated());
        assert!(!spec.is_simple());
        assert!(spec.pages().is_empty());
    }

    #[test]
    fn test_pages_keep_insertion_order() {
        let spec = post_resource()
            .page("index", Page::new("App\\Pages\\ListPosts", "/"))
            .page("create", Page::new("App\\Pages\\CreatePost", "/create"))
            .page("edit", Page::new("App\\Pages\\EditPost", "/{record}/edit"))
            .build();

        let keys: Vec<&str> = spec.pages().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["index", "create", "edit"]);
    }

    #[test]
    fn test_field_kind_parse() {
        assert_eq!("long_text".parse::<FieldKind>(), Ok(FieldKind::LongText));
        assert_eq!("date_time".parse::<FieldKind>(), Ok(FieldKind::DateTime));
        assert_eq!(
            "json".parse::<FieldKind>(),
            Err(UnknownFieldKind("json".to_string()))
        );
    }

    #[test]
    #[should_panic(expected = "empty route path")]
    fn test_empty_page_path_panics() {
        post_resource()
            .page("index", Page::new("App\\Pages\\ListPosts", ""))
            .build();
    }

    #[test]
    #[should_panic(expected = "its own cluster")]
    fn test_cluster_equal_to_target_panics() {
        post_resource()
            .cluster("App\\Filament\\Resources\\PostResource")
            .build();
    }

    #[test]
    #[should_panic(expected = "invalid model class name")]
    fn test_empty_model_panics() {
        ResourceSpec::builder("App\\PostResource", "").build();
    }

    #[test]
    #[should_panic(expected = "invalid field name")]
    fn test_invalid_field_name_panics() {
        post_resource()
            .field(Field::new("published at", FieldKind::DateTime))
            .build();
    }
}
