//! Target-language writers and the helpers they share.
//!
//! Helpers are free functions over a sink and a resolver so each writer can
//! compose the ones it needs.

/// Annotation emission shared by writers whose annotations use `@Name(...)` syntax.
pub mod annotations;

/// Canonical modifier ordering per declaration kind.
pub mod modifiers;

/// Writer for Java compilation units.
pub mod java;
