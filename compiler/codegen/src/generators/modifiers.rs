use std::collections::BTreeSet;

use model::Modifier;
use sink::IndentingSink;
use tracing::warn;

/// Modifiers legal on a method, in the order they must be written.
pub const METHOD_MODIFIERS: &[Modifier] = &[
    Modifier::Public,
    Modifier::Protected,
    Modifier::Private,
    Modifier::Abstract,
    Modifier::Default,
    Modifier::Static,
    Modifier::Final,
    Modifier::Synchronized,
    Modifier::Native,
    Modifier::Strictfp,
];

/// Modifiers legal on a top-level or member type, in the order they must be written.
pub const TYPE_MODIFIERS: &[Modifier] = &[
    Modifier::Public,
    Modifier::Protected,
    Modifier::Private,
    Modifier::Abstract,
    Modifier::Static,
    Modifier::Final,
    Modifier::Strictfp,
];

/// Keep the modifiers of `declared` that appear in `allowed`, ordered as `allowed`.
///
/// The declared order never matters. Modifiers outside `allowed` are dropped
/// and logged against `owner`.
pub fn canonical_modifiers(
    allowed: &[Modifier],
    declared: &BTreeSet<Modifier>,
    owner: &str,
) -> Vec<Modifier> {
    for modifier in declared.iter().filter(|m| !allowed.contains(m)) {
        warn!(%modifier, declaration = owner, "dropping modifier not allowed on this declaration");
    }
    allowed.iter().copied().filter(|m| declared.contains(m)).collect()
}

/// Print the canonical modifiers of a declaration, each followed by a space.
pub fn write_modifiers(
    sink: &mut dyn IndentingSink,
    allowed: &[Modifier],
    declared: &BTreeSet<Modifier>,
    owner: &str,
) {
    for modifier in canonical_modifiers(allowed, declared, owner) {
        sink.print(modifier.keyword());
        sink.print(" ");
    }
}

#[cfg(test)]
mod tests {
    use sink::IndentingWriter;

    use super::*;

    #[test]
    fn test_input_order_is_ignored() {
        let declared: BTreeSet<Modifier> = [Modifier::Static, Modifier::Public].into_iter().collect();
        assert_eq!(canonical_modifiers(METHOD_MODIFIERS, &declared, "main"), [
            Modifier::Public,
            Modifier::Static
        ]);
    }

    #[test]
    fn test_full_method_order() {
        let declared: BTreeSet<Modifier> = [
            Modifier::Strictfp,
            Modifier::Native,
            Modifier::Synchronized,
            Modifier::Final,
            Modifier::Static,
            Modifier::Private,
        ]
        .into_iter()
        .collect();

        let mut out = IndentingWriter::default();
        write_modifiers(&mut out, METHOD_MODIFIERS, &declared, "m");
        assert_eq!(out.as_str(), "private static final synchronized native strictfp ");
    }

    #[test]
    fn test_illegal_modifiers_are_dropped() {
        let declared: BTreeSet<Modifier> =
            [Modifier::Volatile, Modifier::Public, Modifier::Transient].into_iter().collect();
        assert_eq!(canonical_modifiers(METHOD_MODIFIERS, &declared, "m"), [Modifier::Public]);

        let type_level: BTreeSet<Modifier> =
            [Modifier::Synchronized, Modifier::Final].into_iter().collect();
        assert_eq!(canonical_modifiers(TYPE_MODIFIERS, &type_level, "T"), [Modifier::Final]);
    }

    #[test]
    fn test_no_modifiers_prints_nothing() {
        let mut out = IndentingWriter::default();
        write_modifiers(&mut out, TYPE_MODIFIERS, &BTreeSet::new(), "T");
        assert!(out.as_str().is_empty());
    }
}
