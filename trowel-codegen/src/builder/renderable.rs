//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! This module provides abstractions that allow class members to be composed
//! and rendered without direct coupling to CodeBuilder.

/// Represents a fragment of generated code.
///
/// CodeFragments form an intermediate representation between class members
/// and the final string output.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A single-line doc comment (`/** text */`).
    DocComment(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create one line fragment per line of `text`.
    pub fn lines(text: &str) -> Vec<CodeFragment> {
        text.lines().map(CodeFragment::line).collect()
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a list of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
