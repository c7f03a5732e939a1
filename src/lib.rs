// SPDX-License-Identifier: CC0-1.0

//! Quill umbrella crate.
//!
//! This crate primarily serves as the workspace root and re-exports the
//! building blocks needed to render a structural model into source text.
//!
//! All functional code lives in the workspace member crates under
//! `primitives/` and `compiler/`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use codegen::{CodegenError, JavaSourceCodeWriter, SourceCodeWriter};
pub use model::SourceFile;
pub use resolver::{ImportResolver, TypeResolver};
pub use sink::{IndentStyle, IndentingWriter};

/// Miscellaneous metadata about the Quill workspace.
pub mod quill_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
