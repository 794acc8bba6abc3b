//! Rendering seam between the class description and a target language.

use crate::class::ClassSpec;

/// Renders a finished [`ClassSpec`] to source text.
///
/// Implementations own all syntax decisions: literal quoting, name
/// resolution against the class imports, and layout.
pub trait ClassPrinter {
    /// Render the class description to a complete source file.
    fn render(&self, class: &ClassSpec) -> String;
}
