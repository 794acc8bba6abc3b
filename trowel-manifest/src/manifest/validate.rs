//! Validation context and utilities for manifest parsing.

use std::{collections::HashSet, sync::Arc};

use miette::SourceSpan;
use trowel_core::{class_basename, is_valid_fqn, is_valid_identifier, strip_leading_separator};
use trowel_filament::{GenerationFlags, ResourceClassGenerator};
use trowel_php::is_reserved;

use super::{Manifest, ResourceConfig};
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Carries the source content, filename, and current path through the
/// manifest so nested checks can say where a problem lives.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "trowel.toml");
/// let resource = ctx.push("PostResource");
/// resource.validate_class_name("App\\Models\\Post", "model")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["PostResource", "pages"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "page in 'PostResource'" or just "resource" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a string value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Validate a fully qualified class name.
    ///
    /// Every segment must be an identifier and the class itself cannot be a
    /// PHP reserved word.
    pub fn validate_class_name(&self, name: &str, kind: &str) -> Result<()> {
        if !is_valid_fqn(name) {
            return Err(self.source.invalid_class_name_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        let basename = class_basename(name);
        if is_reserved(basename) {
            return Err(self.source.reserved_word_error(
                basename,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a field name.
    pub fn validate_field_name(&self, name: &str) -> Result<()> {
        if !is_valid_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("field"),
                find_name_span(self.source.src(), name),
            ));
        }
        Ok(())
    }
}

/// Validate a parsed manifest against its source.
pub(crate) fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.resources.is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("no resources declared, add a [[resource]] table"));
    }

    let flags = manifest.generation.flags();
    let mut seen = HashSet::new();

    for resource in &manifest.resources {
        if !seen.insert(strip_leading_separator(&resource.class)) {
            return Err(ctx.source_context().validation_error_at(
                format!("resource '{}' is declared more than once", resource.class),
                find_last_value_span(src, &resource.class),
            ));
        }

        let resource_ctx = ctx.push(class_basename(&resource.class));
        validate_resource(&resource_ctx, resource, flags)?;
    }

    Ok(())
}

fn validate_resource<'a>(
    ctx: &ParseContext<'a>,
    resource: &'a ResourceConfig,
    flags: GenerationFlags,
) -> Result<()> {
    ctx.validate_class_name(&resource.class, "resource")?;
    ctx.validate_class_name(&resource.model, "model")?;

    if let Some(cluster) = &resource.cluster {
        ctx.validate_class_name(cluster, "cluster")?;
        if strip_leading_separator(cluster) == strip_leading_separator(&resource.class) {
            return Err(ctx.source_context().validation_error_at(
                format!("resource '{}' cannot be its own cluster", resource.class),
                ctx.find_span(cluster),
            ));
        }
    }

    for (key, page) in &resource.pages {
        if key.is_empty() {
            return Err(ctx.source_context().validation_error_at(
                "page route name must not be empty",
                ctx.find_span(&page.class),
            ));
        }

        let page_ctx = ctx.push(key);
        page_ctx.validate_class_name(&page.class, "page")?;

        if page.path.is_empty() {
            return Err(ctx.source_context().validation_error_at(
                format!("page '{}' has an empty route path", key),
                ctx.find_span(&page.class),
            ));
        }
    }

    let mut field_names = HashSet::new();
    for field in &resource.fields {
        ctx.validate_field_name(&field.name)?;
        if !field_names.insert(field.name.as_str()) {
            return Err(ctx.source_context().validation_error_at(
                format!("field '{}' is declared more than once", field.name),
                find_name_span(ctx.source_context().src(), &field.name),
            ));
        }
    }

    // Names are valid past this point, so building the description cannot panic.
    let spec = resource.to_spec();
    ResourceClassGenerator::new(flags)
        .try_imports(&spec)
        .map_err(|conflict| {
            ctx.source_context().import_collision_error(
                &conflict.fqn,
                &conflict.alias,
                &conflict.existing,
                ctx.find_span(&conflict.fqn),
            )
        })?;

    Ok(())
}

/// Escape a value the way it appears inside a TOML basic string.
fn escape_basic(value: &str) -> String {
    value.replace('\\', "\\\\")
}

/// Find the span of a string value in the TOML source.
///
/// Looks for the basic-string form (`"App\\Models\\Post"`) first, then the
/// literal form (`'App\Models\Post'`). The span covers the text between the
/// quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let escaped = escape_basic(value);
    let basic = format!("\"{}\"", escaped);
    if let Some(pos) = src.find(&basic) {
        return Some(SourceSpan::from((pos + 1, escaped.len())));
    }

    let literal = format!("'{}'", value);
    if let Some(pos) = src.find(&literal) {
        return Some(SourceSpan::from((pos + 1, value.len())));
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Like [`find_value_span`] but returns the last occurrence.
fn find_last_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let escaped = escape_basic(value);
    let basic = format!("\"{}\"", escaped);
    if let Some(pos) = src.rfind(&basic) {
        return Some(SourceSpan::from((pos + 1, escaped.len())));
    }

    let literal = format!("'{}'", value);
    src.rfind(&literal)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Find the span of a field name in the TOML source.
///
/// Searches for `name = "value"` in either quote style.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("name = {quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // The name starts after 'name = "' (8 characters)
            return Some(SourceSpan::from((pos + 8, name.len())));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "trowel.toml");
        assert_eq!(ctx.context_for("resource"), "resource");

        let nested = ctx.push("PostResource").push("edit");
        assert_eq!(nested.context_for("page"), "page in 'PostResource.edit'");
    }

    #[test]
    fn test_find_value_span_basic_string() {
        let src = "model = \"App\\\\Models\\\\Post\"\n";
        let span = find_value_span(src, "App\\Models\\Post").unwrap();

        assert_eq!(span.offset(), 9);
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "App\\\\Models\\\\Post");
    }

    #[test]
    fn test_find_value_span_literal_string() {
        let src = "model = 'App\\Models\\Post'\n";
        let span = find_value_span(src, "App\\Models\\Post").unwrap();

        assert_eq!(&src[span.offset()..span.offset() + span.len()], "App\\Models\\Post");
    }

    #[test]
    fn test_find_value_span_missing() {
        assert!(find_value_span("model = 'Post'", "App\\Models\\Post").is_none());
    }

    #[test]
    fn test_find_name_span() {
        let src = "[[resource.fields]]\nname = \"title\"\n";
        let span = find_name_span(src, "title").unwrap();

        assert_eq!(&src[span.offset()..span.offset() + span.len()], "title");
    }

    #[test]
    fn test_validate_class_name_rejects_reserved_basename() {
        let src = "class = 'App\\Pages\\List'";
        let ctx = ParseContext::new(src, "trowel.toml").push("PostResource");
        let err = ctx.validate_class_name("App\\Pages\\List", "page").unwrap_err();

        match *err {
            Error::ReservedWord {
                ref name,
                ref context,
                span,
                ..
            } => {
                assert_eq!(name, "List");
                assert_eq!(context, "page in 'PostResource'");
                assert!(span.is_some());
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_class_name_rejects_bad_segment() {
        let ctx = ParseContext::new("", "trowel.toml");
        let err = ctx.validate_class_name("App\\1Models\\Post", "model").unwrap_err();

        assert!(matches!(*err, Error::InvalidClassName { .. }));
    }
}
