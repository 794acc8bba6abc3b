//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod make;
mod output;

pub use check::{CheckReport, ResourceSummary};
pub use make::{GenerationResult, MakeReport, PreviewFile, WrittenFile};
pub use output::{Report, TerminalOutput};
