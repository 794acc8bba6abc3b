//! Core operations.
//!
//! Business logic for trowel commands, separated from argument parsing
//! and output rendering.

pub mod check;
pub mod make;
pub mod resource;

pub use check::check;
pub use make::make;
pub use resource::resource_spec;
