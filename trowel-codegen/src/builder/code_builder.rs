//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for incremental building.
///
/// # Example (Consuming API)
///
/// ```
/// use trowel_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::php()
///     .line("return $table")
///     .indent()
///     .line("->columns([]);")
///     .dedent()
///     .build();
///
/// assert_eq!(code, "return $table\n    ->columns([]);\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use trowel_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::php();
/// builder
///     .push_line("class Post")
///     .push_line("{")
///     .push_line("}");
/// let code = builder.build();
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (PSR-12).
    pub fn php() -> Self {
        Self::new(Indent::PHP)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    ///
    /// Empty lines are written without indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add every line of a multi-line text at the current indentation (mutable).
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.push_line(line);
        }
        self
    }

    /// Increase indentation level (mutable).
    fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a single-line doc comment (mutable).
    fn push_doc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::DocComment(text) => {
                self.push_doc(&text);
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a header line, an indented body and a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use trowel_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::php()
    ///     .block_with_close("->columns([", "])", |b: CodeBuilder| b.line("//"))
    ///     .build();
    ///
    /// assert_eq!(code, "->columns([\n    //\n])\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::php()
    }
}
