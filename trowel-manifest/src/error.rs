use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for trowel-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "trowel.toml");
/// ctx.validation_error("no resources declared");
/// ctx.reserved_word_error("List", "page", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid class name error.
    pub fn invalid_class_name_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidClassName {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create a reserved word error.
    pub fn reserved_word_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedWord {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an import collision error.
    pub fn import_collision_error(
        &self,
        name: impl Into<String>,
        alias: impl Into<String>,
        existing: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ImportCollision {
            src: self.named_source(),
            span,
            name: name.into(),
            alias: alias.into(),
            existing: existing.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a trowel.toml or pass its location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse trowel.toml")]
    #[diagnostic(code(trowel::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(trowel::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} class name '{name}'")]
    #[diagnostic(
        code(trowel::invalid_class_name),
        help("use a fully qualified name made of identifiers, e.g. 'App\\Models\\Post'")
    )]
    InvalidClassName {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a valid class name")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("'{name}' is a PHP reserved word")]
    #[diagnostic(
        code(trowel::reserved_word),
        help("rename the {context} class, e.g. '{name}Page' or '{name}Model'")
    )]
    ReservedWord {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(trowel::invalid_identifier),
        help("use only letters, numbers, and underscores, starting with a letter or underscore")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("'{name}' would be imported as '{alias}', which is already '{existing}'")]
    #[diagnostic(
        code(trowel::import_collision),
        help("the generated class could not tell the two apart; rename one of the classes")
    )]
    ImportCollision {
        #[source_code]
        src: NamedSource<String>,
        #[label("collides with '{existing}'")]
        span: Option<SourceSpan>,
        name: String,
        alias: String,
        existing: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let ctx = SourceContext::new("[generation]\n", "trowel.toml");
        let err = ctx.validation_error("no resources declared");

        assert_eq!(err.to_string(), "no resources declared");
        assert!(matches!(*err, Error::Validation { span: None, .. }));
    }

    #[test]
    fn test_import_collision_message() {
        let ctx = SourceContext::new("", "trowel.toml");
        let err = ctx.import_collision_error(
            "App\\Models\\Table",
            "Table",
            "Filament\\Tables\\Table",
            None,
        );

        assert_eq!(
            err.to_string(),
            "'App\\Models\\Table' would be imported as 'Table', which is already 'Filament\\Tables\\Table'"
        );
    }
}
