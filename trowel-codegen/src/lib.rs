//! Shared code generation building blocks for Trowel.
//!
//! This crate provides the language-agnostic pieces that a class printer and
//! a class generator meet on.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder, CodeFragment, etc.)
//! - [`class`] - The generic class description (ClassSpec, MethodSpec, Value, etc.)
//! - [`imports`] - Deduplicated imports and short-name resolution
//! - [`printer`] - The [`ClassPrinter`] seam implemented per target language

pub mod builder;
pub mod class;
pub mod imports;
pub mod printer;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use class::{
    ArrayItem, ClassSpec, MethodCall, MethodSpec, ParamSpec, PropertySpec, Statement, TypeRef,
    Value, Visibility,
};
pub use imports::{AliasConflict, ImportSet, NameResolver, collision_alias};
pub use printer::ClassPrinter;
