//! Import-aware name shortening for a single compilation unit.

use std::collections::{BTreeMap, BTreeSet};

use model::SourceFile;
use tracing::debug;

use crate::type_name::{self, split_qualified};
use crate::{ResolveError, ResolveResult, TypeResolver};

/// Resolver backed by the package, imports and declared types of one unit.
///
/// A class name is written in its simple form when it is visible without
/// qualification: imported explicitly, declared in the unit's package, or in
/// one of the implicitly visible packages (such as `java.lang`). Everything
/// else stays fully qualified.
///
/// Shadowing follows Java scoping: a type declared in the unit hides every
/// import and package member of the same simple name, and a class of the
/// unit's own package hides an implicitly visible class of the same simple
/// name. Hidden classes are written fully qualified and never imported.
#[derive(Debug, Clone, Default)]
pub struct ImportResolver {
    package: Option<String>,
    implicit_packages: BTreeSet<String>,
    /// Simple name -> every qualified name imported under it
    imports: BTreeMap<String, BTreeSet<String>>,
    /// Simple names of the types declared in the unit itself
    declared: BTreeSet<String>,
    /// Simple names of referenced classes from the unit's own package
    package_members: BTreeSet<String>,
}

impl ImportResolver {
    /// Create a resolver for a unit in `package` with no imports
    pub fn new(package: Option<&str>) -> Self {
        Self { package: package.map(str::to_string), ..Self::default() }
    }

    /// Treat every class in `package` as visible without an import
    pub fn with_implicit_package(mut self, package: impl Into<String>) -> Self {
        self.implicit_packages.insert(package.into());
        self
    }

    /// Record a type declared in the unit; it shadows same-named classes elsewhere
    pub fn with_declared_type(mut self, simple_name: impl Into<String>) -> Self {
        self.declared.insert(simple_name.into());
        self
    }

    /// Record a class of the unit's own package; it hides same-named implicit classes
    pub fn with_package_member(mut self, simple_name: impl Into<String>) -> Self {
        self.package_members.insert(simple_name.into());
        self
    }

    /// Add an explicit single-type import.
    ///
    /// Importing two classes with the same simple name is accepted here; it
    /// makes both of them fail to shorten. An import hidden by a declared type
    /// is kept out of [`TypeResolver::imports`].
    pub fn import(&mut self, qualified: &str) -> ResolveResult<()> {
        let qualified = qualified.trim();
        let (package, simple) = split_qualified(qualified);
        if package.is_none() || type_name::referenced_names(qualified)? != [qualified] {
            return Err(ResolveError::InvalidName(qualified.to_string()));
        }
        self.imports.entry(simple.to_string()).or_default().insert(qualified.to_string());
        Ok(())
    }

    /// Builder form of [`ImportResolver::import`]
    pub fn with_import(mut self, qualified: &str) -> ResolveResult<Self> {
        self.import(qualified)?;
        Ok(self)
    }

    /// Build a resolver that imports what `source` needs.
    ///
    /// Every class referenced by the unit is imported unless it is already
    /// visible, or its simple name is shared with another referenced class or
    /// with a type declared in the unit. Those stay fully qualified.
    pub fn for_source_file(source: &SourceFile, implicit_packages: &[&str]) -> ResolveResult<Self> {
        let mut resolver = Self::new(source.package());
        for package in implicit_packages {
            resolver.implicit_packages.insert((*package).to_string());
        }
        for declaration in source.types() {
            resolver.declared.insert(declaration.name().to_string());
        }

        let mut candidates: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for reference in source.type_references() {
            for name in type_name::referenced_names(reference)? {
                if let (Some(package), simple) = split_qualified(name) {
                    if source.package() == Some(package) {
                        resolver.package_members.insert(simple.to_string());
                    }
                    candidates.entry(simple).or_default().insert(name);
                }
            }
        }

        for (simple, names) in candidates {
            let mut names = names.into_iter();
            let (Some(name), None) = (names.next(), names.next()) else {
                debug!(simple, "conflicting references keep their qualified names");
                continue;
            };
            if resolver.is_visible(name) || resolver.declared.contains(simple) {
                continue;
            }
            resolver.import(name)?;
        }
        debug!(count = resolver.imports.len(), "collected imports");
        Ok(resolver)
    }

    /// Whether `qualified` lives in the unit's package or an implicit one
    fn is_visible(&self, qualified: &str) -> bool {
        match split_qualified(qualified) {
            (Some(package), _) => {
                self.package.as_deref() == Some(package) || self.implicit_packages.contains(package)
            }
            (None, _) => true,
        }
    }

    fn shorten_name(&self, name: &str) -> ResolveResult<String> {
        let (Some(package), simple) = split_qualified(name) else {
            return Ok(name.to_string());
        };
        let own_package = self.package.as_deref() == Some(package);

        if self.declared.contains(simple) {
            let shortened = if own_package { simple } else { name };
            return Ok(shortened.to_string());
        }

        if let Some(bound) = self.imports.get(simple) {
            if bound.len() > 1 {
                return Err(ResolveError::Ambiguous {
                    name: name.to_string(),
                    simple: simple.to_string(),
                    candidates: bound.iter().cloned().collect(),
                });
            }
            let shortened = if bound.contains(name) { simple } else { name };
            return Ok(shortened.to_string());
        }

        if own_package {
            return Ok(simple.to_string());
        }
        if self.implicit_packages.contains(package) && !self.package_members.contains(simple) {
            return Ok(simple.to_string());
        }
        Ok(name.to_string())
    }
}

impl TypeResolver for ImportResolver {
    fn shorten(&self, qualified: &str) -> ResolveResult<String> {
        type_name::rewrite(qualified, |name| self.shorten_name(name))
    }

    fn imports(&self) -> Vec<String> {
        let mut all: Vec<String> = self
            .imports
            .iter()
            .filter(|(simple, _)| !self.declared.contains(*simple))
            .flat_map(|(_, qualified)| qualified.iter().cloned())
            .collect();
        all.sort();
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unqualified_names_pass_through() {
        let resolver = ImportResolver::new(Some("com.example"));
        assert_eq!(resolver.shorten("int").as_deref(), Ok("int"));
        assert_eq!(resolver.shorten("Foo").as_deref(), Ok("Foo"));
    }

    #[test]
    fn test_import_rejects_unqualified_and_generic_names() {
        let mut resolver = ImportResolver::new(None);
        assert!(resolver.import("List").is_err());
        assert!(resolver.import("java.util.List<java.lang.String>").is_err());
        assert!(resolver.import("java.util.List").is_ok());
    }

    #[test]
    fn test_same_package_is_visible() {
        let resolver = ImportResolver::new(Some("com.example"));
        assert_eq!(resolver.shorten("com.example.Base").as_deref(), Ok("Base"));
        assert_eq!(resolver.shorten("com.example.sub.Base").as_deref(), Ok("com.example.sub.Base"));
    }
}
