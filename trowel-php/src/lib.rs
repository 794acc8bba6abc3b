//! PHP rendering for Trowel class descriptions.
//!
//! [`PhpPrinter`] turns a [`ClassSpec`](trowel_codegen::ClassSpec) into a
//! PSR-12 formatted PHP file. Value rendering lives in [`literal`] and the
//! reserved word list in [`reserved`].

pub mod literal;
pub mod printer;
pub mod reserved;

pub use literal::{quote_string, render_type, render_value};
pub use printer::{PhpPrinter, render_imports};
pub use reserved::{PHP_RESERVED_WORDS, is_reserved};
