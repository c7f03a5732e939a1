//! Scope restoration tests for `IndentGuard` and `indented`

use std::panic::{catch_unwind, AssertUnwindSafe};

use sink::{indented, IndentGuard, IndentStyle, IndentingSink, IndentingWriter};

fn fail_inside_scope(out: &mut dyn IndentingSink) -> Result<(), String> {
    indented(out, |out| -> Result<(), String> {
        out.println("before");
        Err::<(), String>("boom".to_string())?;
        out.println("unreachable");
        Ok(())
    })
}

#[test]
fn test_nested_scopes_restore_depth() {
    let mut out = IndentingWriter::new(IndentStyle::Spaces(2));
    out.println("a {");
    indented(&mut out, |out| {
        out.println("b {");
        indented(out, |out| {
            assert_eq!(out.depth(), 2);
            out.println("c");
        });
        assert_eq!(out.depth(), 1);
        out.println("}");
    });
    out.println("}");

    assert_eq!(out.depth(), 0);
    assert_eq!(out.into_string(), "a {\n  b {\n    c\n  }\n}\n");
}

#[test]
fn test_error_return_restores_depth() {
    let mut out = IndentingWriter::default();
    let result = fail_inside_scope(&mut out);

    assert_eq!(result, Err("boom".to_string()));
    assert_eq!(out.depth(), 0);
    assert_eq!(out.as_str(), "    before\n");
}

#[test]
fn test_panic_restores_depth() {
    let mut out = IndentingWriter::default();
    out.enter_scope();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut guard = IndentGuard::enter(&mut out);
        guard.println("partial");
        panic!("render aborted");
    }));

    assert!(outcome.is_err());
    assert_eq!(out.depth(), 1);
}

#[test]
fn test_guard_through_trait_object() {
    let mut out = IndentingWriter::new(IndentStyle::Tab);
    {
        let sink: &mut dyn IndentingSink = &mut out;
        let mut guard = IndentGuard::enter(sink);
        guard.println("x");
        assert_eq!(guard.depth(), 1);
    }
    assert_eq!(out.depth(), 0);
    assert_eq!(out.as_str(), "\tx\n");
}
