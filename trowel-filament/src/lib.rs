//! Filament resource class generation.
//!
//! [`ResourceClassGenerator`] turns a [`ResourceSpec`] into a
//! [`ClassSpec`](trowel_codegen::ClassSpec): the imports, properties and
//! methods of a Filament resource, with `form` and `table` bodies supplied
//! by a [`FormBodyProvider`] and a [`TableBodyProvider`].
//!
//! # Module Organization
//!
//! - [`spec`] - The resource description (ResourceSpec, Page, Field)
//! - [`generator`] - Class assembly and generation flags
//! - [`body`] - Body provider traits and their context
//! - [`scaffold`] - Default providers built from the entity's fields
//! - [`hooks`] - Per-element customization callbacks
//! - [`framework`] - Framework class names the generated code relies on
//! - [`file`] - The generated class as a file

pub mod body;
pub mod file;
pub mod framework;
pub mod generator;
pub mod hooks;
pub mod scaffold;
pub mod spec;

pub use body::{BodyContext, FormBodyProvider, TableBodyProvider};
pub use file::ResourceClassFile;
pub use generator::{GenerationFlags, ResourceClassGenerator};
pub use hooks::{ElementHooks, MethodSlot, PropertySlot};
pub use scaffold::{ScaffoldForm, ScaffoldTable};
pub use spec::{Field, FieldKind, Page, ResourceSpec, ResourceSpecBuilder, UnknownFieldKind};
