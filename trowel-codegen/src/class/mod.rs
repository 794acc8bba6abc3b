//! Language-agnostic class description.
//!
//! A [`ClassSpec`] is the intent of a class: its name, parent, imports,
//! typed properties and typed methods. Values and statements are small typed
//! nodes so that a [`ClassPrinter`](crate::ClassPrinter) decides quoting and
//! name resolution instead of string concatenation.

mod expr;
mod spec;
mod types;

pub use expr::{ArrayItem, MethodCall, Statement, Value};
pub use spec::{ClassSpec, MethodSpec, ParamSpec, PropertySpec};
pub use types::{TypeRef, Visibility};
