use super::{labels, run, vars};

#[test]
fn two_declarations() {
    let (result, session) = run("LET A = 5\nLET B = 3");

    assert_eq!(result, Ok(()));
    assert_eq!(vars(&session), vec![("A", 5), ("B", 3)]);
}

#[test]
fn labelled_declaration() {
    let (result, session) = run("X: LET A = 5");

    assert_eq!(result, Ok(()));
    assert_eq!(labels(&session), vec![(&"X".to_string(), 1)]);
    assert_eq!(vars(&session), vec![("A", 5)]);
}

#[test]
fn mixed_program() {
    let (result, session) = run(
        "
        # compute nothing, carefully
        start: let first = 10

        let second = -3
        middle:
        # LET IGNORED = 1
        end: let third = 0
        ",
    );

    assert_eq!(result, Ok(()));
    assert_eq!(
        vars(&session),
        vec![("FIRST", 10), ("SECOND", -3), ("THIRD", 0)]
    );
    assert_eq!(
        labels(&session),
        vec![
            (&"START".to_string(), 2),
            (&"MIDDLE".to_string(), 5),
            (&"END".to_string(), 7)
        ]
    );
}

#[test]
fn comments_never_touch_tables() {
    let (result, session) = run("# LET A = 5\n#\n   # LET B = 1");

    assert_eq!(result, Ok(()));
    assert!(session.bindings().is_empty());
    assert!(session.labels().is_empty());
}

#[test]
fn colon_inside_comment_still_marks_a_label() {
    let (result, session) = run("# NOTE: LET B = 1");

    assert_eq!(result, Ok(()));
    assert_eq!(session.labels().get("# NOTE"), Some(1));
    assert_eq!(vars(&session), vec![("B", 1)]);
}

#[test]
fn lowercase_source_is_normalized() {
    let (result, session) = run("loop: let counter = 1");

    assert_eq!(result, Ok(()));
    assert_eq!(vars(&session), vec![("COUNTER", 1)]);
    assert_eq!(session.labels().get("LOOP"), Some(1));
}

#[test]
fn blank_program() {
    let (result, session) = run("\n\n");

    assert_eq!(result, Ok(()));
    assert!(session.bindings().is_empty());
}
