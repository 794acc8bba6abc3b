//! Built-in lints.

mod generated_fields;
mod missing_pages;
mod scattered_pages;
mod view_page;

pub use generated_fields::GeneratedFieldsLint;
pub use missing_pages::MissingPagesLint;
pub use scattered_pages::ScatteredPagesLint;
pub use view_page::ViewPageLint;

#[cfg(test)]
pub(crate) fn parse_manifest(content: &str) -> crate::Manifest {
    toml::from_str(content).expect("Failed to parse test manifest")
}
