//! Declaration modifiers.
//!
//! The model stores modifiers as an unordered set. Which modifiers are legal
//! for a given declaration kind, and the order they are written in, is the
//! writer's business.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A declaration modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `abstract`
    Abstract,
    /// `static`
    Static,
    /// `final`
    Final,
    /// `transient`
    Transient,
    /// `volatile`
    Volatile,
    /// `synchronized`
    Synchronized,
    /// `native`
    Native,
    /// `strictfp`
    Strictfp,
    /// `default` (interface methods)
    Default,
}

impl Modifier {
    /// The keyword as it appears in source text
    pub fn keyword(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
            Modifier::Default => "default",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.keyword()) }
}
