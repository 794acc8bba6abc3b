//! trowel.toml parsing, validation and lints.
//!
//! A manifest lists the resources to generate:
//!
//! ```toml
//! [generation]
//! partial_imports = true
//!
//! [[resource]]
//! class = "App\\Filament\\Resources\\PostResource"
//! model = "App\\Models\\Post"
//! soft_deletes = true
//!
//! [resource.pages.index]
//! class = "App\\Filament\\Resources\\PostResource\\Pages\\ListPosts"
//! path = "/"
//! ```
//!
//! Parsing validates every name up front, so converting a parsed manifest
//! into [`trowel_filament::ResourceSpec`]s never panics.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
pub mod lint;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use lint::{Diagnostic, Lint, Linter, Severity, run_lints};
pub use manifest::*;
