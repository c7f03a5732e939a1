#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Quill Structural Model
//!
//! This crate defines the in-memory tree that describes a compilation unit
//! before it is rendered to text: type declarations, their methods, the
//! methods' parameters, modifiers, annotations and bodies.
//!
//! The model is pure data. Builders never validate; invalid combinations are
//! reported by [`SourceFile::validate`], which writers call before emitting
//! anything.

pub mod declaration;
pub mod modifier;
pub mod statement;

use thiserror::Error;

// Re-export the model types for convenience
pub use declaration::*;
pub use modifier::Modifier;
pub use statement::*;

/// Model invariants that were violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A type declaration has an empty name
    #[error("type declaration name must not be empty")]
    EmptyTypeName,
    /// A method inside `type_name` has an empty name
    #[error("method declared in '{type_name}' has an empty name")]
    EmptyMethodName {
        /// Enclosing type
        type_name: String,
    },
    /// A parameter of `method` has an empty name
    #[error("parameter of method '{method}' has an empty name")]
    EmptyParameterName {
        /// Owning method
        method: String,
    },
    /// Two parameters of `method` share the name `parameter`
    #[error("duplicate parameter '{parameter}' in method '{method}'")]
    DuplicateParameter {
        /// Owning method
        method: String,
        /// The repeated parameter name
        parameter: String,
    },
    /// A type reference is empty
    #[error("empty type reference in {context}")]
    EmptyTypeReference {
        /// Where the reference appears, e.g. "return type of 'main'"
        context: String,
    },
}

/// Errors raised while loading or saving a model.
#[derive(Debug, Error)]
pub enum ModelIoError {
    /// Underlying I/O error while reading or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
