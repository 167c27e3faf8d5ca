use super::{run, vars};
use crate::{Error, ErrorKind};

#[test]
fn redeclared_variable() {
    let (result, session) = run("LET A = 5\nLET A = 2");

    assert_eq!(
        result,
        Err(Error::new(
            2,
            "LET A = 2",
            ErrorKind::DuplicateDeclaration("A".into())
        ))
    );
    assert_eq!(vars(&session), vec![("A", 5)]);
}

#[test]
fn redeclaration_is_found_only_when_it_runs() {
    // line 1 loads fine and runs; the clash is reported at line 3
    let (result, session) = run("LET A = 1\n# gap\nLET A = 1\nLET B = 2");

    let e = result.unwrap_err();
    assert_eq!(e.line, 3);
    assert_eq!(e.kind, ErrorKind::DuplicateDeclaration("A".into()));
    assert!(!session.bindings().contains("B"));
}

#[test]
fn non_integer_value() {
    let (result, session) = run("LET A = FOO");

    assert_eq!(
        result,
        Err(Error::new(
            1,
            "LET A = FOO",
            ErrorKind::InvalidLiteral {
                name: "A".into(),
                literal: "FOO".into(),
            }
        ))
    );
    assert!(session.bindings().is_empty());
}

#[test]
fn unknown_statement() {
    let (result, session) = run("GOTO NOWHERE");

    assert_eq!(
        result,
        Err(Error::new(1, "GOTO NOWHERE", ErrorKind::Syntax))
    );
    assert!(session.bindings().is_empty());
}

#[test]
fn syntax_error_prevents_any_execution() {
    let (result, session) = run("LET A = 5\nLET B = 6\nPRINT A");

    assert_eq!(result.unwrap_err().line, 3);
    assert!(session.bindings().is_empty());
}

#[test]
fn malformed_declaration_is_a_syntax_error() {
    let (result, _) = run("LET A 5");

    assert_eq!(result, Err(Error::new(1, "LET A 5", ErrorKind::Syntax)));
}

#[test]
fn repeated_label() {
    let (result, session) = run("X: LET A = 1\nLET B = 2\nX: LET C = 3");

    assert_eq!(
        result,
        Err(Error::new(
            3,
            "X: LET C = 3",
            ErrorKind::DuplicateLabel("X".into())
        ))
    );
    assert!(session.bindings().is_empty());
}

#[test]
fn repeated_label_on_unreachable_kind() {
    // the label is checked before the body is classified
    let (result, _) = run("L: # one\nL: JUMP L");

    assert_eq!(result.unwrap_err().kind, ErrorKind::DuplicateLabel("L".into()));
}
