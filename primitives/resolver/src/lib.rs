#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Name resolution for rendered type references.
//!
//! Writers never decide on their own whether a type is written as `List` or
//! `java.util.List`. Every reference goes through a [`TypeResolver`], so all
//! target-language writers share one qualification policy.

pub mod import_resolver;
pub mod type_name;

use thiserror::Error;

pub use import_resolver::ImportResolver;

/// Errors raised while shortening a type reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The reference is not a well-formed (possibly qualified) type name
    #[error("invalid type reference '{0}'")]
    InvalidName(String),
    /// The simple name is bound to more than one import, so it cannot be shortened safely
    #[error("'{name}' cannot be shortened: '{simple}' is imported from {}", .candidates.join(", "))]
    Ambiguous {
        /// The reference that was being shortened
        name: String,
        /// Its simple name
        simple: String,
        /// Every qualified name imported under `simple`
        candidates: Vec<String>,
    },
}

/// Result alias for resolver operations
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Decides the display form of a type reference in the current compilation unit.
pub trait TypeResolver {
    /// Return the shortest form of `qualified` that is unambiguous in this unit
    fn shorten(&self, qualified: &str) -> ResolveResult<String>;

    /// Qualified names the unit imports, sorted and deduplicated.
    ///
    /// Resolvers without an import context return an empty list.
    fn imports(&self) -> Vec<String> { Vec::new() }
}

/// A resolver that leaves every reference exactly as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullyQualified;

impl TypeResolver for FullyQualified {
    fn shorten(&self, qualified: &str) -> ResolveResult<String> {
        type_name::check(qualified)?;
        Ok(qualified.trim().to_string())
    }
}

impl<R: TypeResolver + ?Sized> TypeResolver for &R {
    fn shorten(&self, qualified: &str) -> ResolveResult<String> { (**self).shorten(qualified) }

    fn imports(&self) -> Vec<String> { (**self).imports() }
}
