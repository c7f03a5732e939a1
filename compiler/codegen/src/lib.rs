#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Source writers for the Quill structural model.
//!
//! This crate turns a finished [`SourceFile`] into source text for a target
//! language. It focuses solely on rendering: deciding what to generate,
//! persisting files and validating the output with a compiler are left to
//! callers.
//!
//! Every writer follows the same contract ([`SourceCodeWriter`]): type
//! references go through a [`TypeResolver`], indentation goes through an
//! [`IndentingSink`] scope, and the same model with the same resolver always
//! produces the same bytes.

pub mod generators;

use model::{SourceFile, StructuralError};
use resolver::{ImportResolver, ResolveError, TypeResolver};
use sink::{IndentStyle, IndentingSink, IndentingWriter};
use thiserror::Error;

pub use generators::java::JavaSourceCodeWriter;

/// Error type for rendering operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The model violates a structural invariant; nothing was emitted.
    #[error("invalid model: {0}")]
    Structure(#[from] StructuralError),
    /// A type reference could not be shortened unambiguously.
    #[error("cannot resolve type reference: {0}")]
    Resolve(#[from] ResolveError),
    /// No writer is registered for the requested language.
    #[error("no source writer for language '{0}'")]
    UnsupportedLanguage(String),
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Defines the interface every target-language writer implements.
///
/// Implementors provide [`SourceCodeWriter::render`]; the provided methods
/// wire it to an in-memory sink and an import-collecting resolver.
pub trait SourceCodeWriter {
    /// Language name (e.g. "java")
    fn language(&self) -> &str;

    /// File extension of rendered units, without the dot
    fn file_extension(&self) -> &str;

    /// Indentation used by [`SourceCodeWriter::render_to_string`]
    fn indent_style(&self) -> IndentStyle { IndentStyle::default() }

    /// Packages whose classes are visible without an import
    fn implicit_packages(&self) -> &[&str] { &[] }

    /// Render `source` into `sink`, shortening every type reference with `resolver`.
    ///
    /// The model is validated and every type reference is resolved before
    /// anything is written, so an error leaves `sink` unchanged. Sinks that
    /// already hold text keep it; [`SourceCodeWriter::render_to_string`]
    /// drops its own buffer on error.
    fn render(
        &self,
        source: &SourceFile,
        sink: &mut dyn IndentingSink,
        resolver: &dyn TypeResolver,
    ) -> Result<()>;

    /// Render into a fresh buffer and return the text.
    ///
    /// On error the partially rendered text is dropped.
    fn render_to_string(&self, source: &SourceFile, resolver: &dyn TypeResolver) -> Result<String> {
        let mut out = IndentingWriter::new(self.indent_style());
        self.render(source, &mut out, resolver)?;
        Ok(out.into_string())
    }

    /// Build the import resolver this language uses for `source`
    fn resolver_for(&self, source: &SourceFile) -> Result<ImportResolver> {
        Ok(ImportResolver::for_source_file(source, self.implicit_packages())?)
    }

    /// Render `source` with imports collected from the model itself
    fn generate(&self, source: &SourceFile) -> Result<String> {
        let resolver = self.resolver_for(source)?;
        self.render_to_string(source, &resolver)
    }

    /// Conventional file name for `source`: its first type's name plus the extension
    fn file_name(&self, source: &SourceFile) -> Option<String> {
        source
            .types()
            .first()
            .map(|declaration| format!("{}.{}", declaration.name(), self.file_extension()))
    }
}

/// Look up the writer for `language`, configured with `indent`.
pub fn writer_for(language: &str, indent: IndentStyle) -> Result<Box<dyn SourceCodeWriter>> {
    match language.to_ascii_lowercase().as_str() {
        "java" => Ok(Box::new(JavaSourceCodeWriter::new(indent))),
        other => Err(CodegenError::UnsupportedLanguage(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_for_known_language() {
        let writer = writer_for("Java", IndentStyle::Tab).expect("java writer");
        assert_eq!(writer.language(), "java");
        assert_eq!(writer.file_extension(), "java");
        assert_eq!(writer.indent_style(), IndentStyle::Tab);
    }

    #[test]
    fn test_writer_for_unknown_language() {
        match writer_for("kotlin", IndentStyle::default()) {
            Err(CodegenError::UnsupportedLanguage(language)) => assert_eq!(language, "kotlin"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("kotlin has no writer"),
        }
    }

    #[test]
    fn test_file_name_uses_first_type() {
        let writer = JavaSourceCodeWriter::default();
        let source = SourceFile::in_package("com.example")
            .with_type(model::TypeDeclaration::new("Application"))
            .with_type(model::TypeDeclaration::new("Helper"));
        assert_eq!(writer.file_name(&source).as_deref(), Some("Application.java"));
        assert_eq!(writer.file_name(&SourceFile::new()), None);
    }
}
