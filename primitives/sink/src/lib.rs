#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `quill-sink`: Indentation-Aware Output
//!
//! This crate defines the output abstraction every source writer renders
//! into.
//!
//! ## Core Concepts
//!
//! ### `IndentingSink` Trait
//! Accumulates line-structured text (`print`, `println`) and tracks a nesting
//! depth. Writers never compute indentation themselves; they open a scope and
//! let the sink prefix lines.
//!
//! ### `IndentGuard`
//! A scope guard that enters one nesting level when created and leaves it when
//! dropped. Because the exit step lives in `Drop`, the previous depth is
//! restored on every path out of the scope: normal completion, early `?`
//! returns and panics alike.
//!
//! ### `IndentingWriter`
//! The in-memory implementation. Indentation is written lazily, on the first
//! print of a line, so blank lines never carry trailing whitespace.
//!
//! ## Example
//! ```
//! use sink::{indented, IndentingSink, IndentingWriter};
//!
//! let mut out = IndentingWriter::default();
//! out.println("class Foo {");
//! indented(&mut out, |out| out.println("// body"));
//! out.println("}");
//! assert_eq!(out.into_string(), "class Foo {\n    // body\n}\n");
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

/// Line-oriented text output with scoped indentation.
pub trait IndentingSink {
    /// Append `text` to the current line, indenting first if the line is empty
    fn print(&mut self, text: &str);

    /// Append `text` and terminate the line
    fn println(&mut self, text: &str);

    /// Terminate the current line without writing anything else
    fn blank_line(&mut self) { self.println("") }

    /// Increase the nesting depth by one level.
    ///
    /// Prefer [`IndentGuard`] or [`indented`], which pair this with
    /// [`IndentingSink::exit_scope`] automatically.
    fn enter_scope(&mut self);

    /// Decrease the nesting depth by one level
    fn exit_scope(&mut self);

    /// Current nesting depth
    fn depth(&self) -> usize;
}

/// Scope guard holding one level of indentation on a sink.
pub struct IndentGuard<'a, S: IndentingSink + ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: IndentingSink + ?Sized> IndentGuard<'a, S> {
    /// Enter a nested scope on `sink`; the scope ends when the guard drops
    pub fn enter(sink: &'a mut S) -> Self {
        sink.enter_scope();
        Self { sink }
    }
}

impl<S: IndentingSink + ?Sized> Deref for IndentGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S { &*self.sink }
}

impl<S: IndentingSink + ?Sized> DerefMut for IndentGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S { &mut *self.sink }
}

impl<S: IndentingSink + ?Sized> Drop for IndentGuard<'_, S> {
    fn drop(&mut self) { self.sink.exit_scope(); }
}

/// Run `body` one indentation level deeper than the current one.
///
/// The depth is restored before this function returns, whatever `body` does.
pub fn indented<S, R, F>(sink: &mut S, body: F) -> R
where
    S: IndentingSink + ?Sized,
    F: FnOnce(&mut S) -> R,
{
    let mut guard = IndentGuard::enter(sink);
    body(&mut *guard)
}

/// Unit of indentation written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentStyle {
    /// `n` spaces per level
    Spaces(usize),
    /// One tab character per level
    Tab,
}

impl IndentStyle {
    /// The text written for a single level
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Spaces(width) => " ".repeat(*width),
            IndentStyle::Tab => "\t".to_string(),
        }
    }
}

impl Default for IndentStyle {
    fn default() -> Self { IndentStyle::Spaces(4) }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentStyle::Spaces(width) => write!(f, "{width} spaces"),
            IndentStyle::Tab => f.write_str("tab"),
        }
    }
}

/// In-memory [`IndentingSink`].
#[derive(Debug, Clone)]
pub struct IndentingWriter {
    out: String,
    unit: String,
    depth: usize,
    at_line_start: bool,
}

impl IndentingWriter {
    /// Create an empty writer that indents with `style`
    pub fn new(style: IndentStyle) -> Self {
        Self { out: String::new(), unit: style.unit(), depth: 0, at_line_start: true }
    }

    /// Text written so far
    pub fn as_str(&self) -> &str { &self.out }

    /// Consume the writer and return its text
    pub fn into_string(self) -> String { self.out }

    fn write_fragment(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.depth {
                self.out.push_str(&self.unit);
            }
            self.at_line_start = false;
        }
        self.out.push_str(fragment);
    }

    fn end_line(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
    }
}

impl Default for IndentingWriter {
    fn default() -> Self { Self::new(IndentStyle::default()) }
}

impl IndentingSink for IndentingWriter {
    fn print(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.write_fragment(first);
        }
        for line in lines {
            self.end_line();
            self.write_fragment(line);
        }
    }

    fn println(&mut self, text: &str) {
        self.print(text);
        self.end_line();
    }

    fn enter_scope(&mut self) { self.depth += 1; }

    fn exit_scope(&mut self) { self.depth = self.depth.saturating_sub(1); }

    fn depth(&self) -> usize { self.depth }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_indentation() {
        let mut out = IndentingWriter::new(IndentStyle::Spaces(2));
        out.enter_scope();
        out.print("a");
        out.print("b");
        out.println("c");
        out.blank_line();
        out.println("d");
        assert_eq!(out.as_str(), "  abc\n\n  d\n");
    }

    #[test]
    fn test_embedded_newlines_are_indented() {
        let mut out = IndentingWriter::new(IndentStyle::Tab);
        indented(&mut out, |out| out.println("first\nsecond\n\nthird"));
        assert_eq!(out.into_string(), "\tfirst\n\tsecond\n\n\tthird\n");
    }

    #[test]
    fn test_default_writer_uses_four_spaces() {
        let mut out = IndentingWriter::default();
        assert_eq!(out.depth(), 0);
        assert!(out.as_str().is_empty());
        indented(&mut out, |out| out.println("x"));
        assert_eq!(out.as_str(), "    x\n");
    }

    #[test]
    fn test_exit_scope_saturates() {
        let mut out = IndentingWriter::new(IndentStyle::default());
        out.exit_scope();
        assert_eq!(out.depth(), 0);
    }

    #[test]
    fn test_indent_style_serde() {
        let spaces: IndentStyle = serde_json::from_str(r#"{"spaces":2}"#).expect("spaces");
        assert_eq!(spaces, IndentStyle::Spaces(2));
        let tab: IndentStyle = serde_json::from_str(r#""tab""#).expect("tab");
        assert_eq!(tab, IndentStyle::Tab);
        assert_eq!(IndentStyle::Spaces(4).to_string(), "4 spaces");
    }
}
