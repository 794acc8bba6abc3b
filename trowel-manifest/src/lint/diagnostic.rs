//! Diagnostics reported by manifest lints.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The manifest will produce a broken resource.
    Error,
    /// The resource generates but is probably not what was meant.
    Warning,
    /// Worth knowing, nothing to fix.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a lint.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the lint that produced this diagnostic.
    pub lint: String,
    pub message: String,
    /// Optional location in the manifest (e.g., "PostResource.pages.view").
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, lint, message)
    }

    pub fn warning(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, lint, message)
    }

    pub fn info(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, lint, message)
    }

    fn new(severity: Severity, lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            lint: lint.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("missing-pages", "resource has no pages").at("PostResource");
        assert!(diag.severity.is_warning());
        assert_eq!(diag.to_string(), "warning: resource has no pages (at PostResource)");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let diag = Diagnostic::info("view-page", "no view page");
        let json = serde_json::to_value(&diag).unwrap();

        assert_eq!(json["severity"], "info");
        assert_eq!(json["lint"], "view-page");
        assert!(json["location"].is_null());
    }
}
