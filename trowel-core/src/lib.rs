//! Core utilities and types for the Trowel scaffolding generator.
//!
//! This crate provides the fundamental helpers shared across the Trowel
//! crates: fully qualified name handling, page name pluralization and the rules
//! for writing generated files to disk.

mod file;
mod fqn;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Fully qualified names
pub use fqn::{
    NAMESPACE_SEPARATOR, class_basename, extract_namespace, is_valid_fqn, is_valid_identifier,
    join_fqn, shared_namespace, strip_leading_separator,
};
// String utilities
pub use utils::pluralize;
