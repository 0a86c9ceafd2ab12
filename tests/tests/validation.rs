//! End-to-end validation through the public surface, using per-call raise
//! mode so the tests are independent of the process-wide configuration.

use attest_constraint::{declare, Declaration};
use attest_core::{snapshot, AttestError, ErrorKind, Snapshot, TypeTag, Value};
use attest_engine::accepts_with;
use attest_notify::Mode;

const RAISE: Option<Mode> = Some(Mode::Raise);

#[test]
fn accepts_every_scalar_against_its_own_tag() {
    let cases: Vec<(TypeTag, Value)> = vec![
        (TypeTag::Null, Value::Null),
        (TypeTag::Bool, Value::from(true)),
        (TypeTag::Int, Value::from(42)),
        (TypeTag::Float, Value::from(0.5)),
        (TypeTag::String, Value::from("abc")),
        (TypeTag::Seq, Value::Seq(vec![])),
        (TypeTag::Map, Value::Map(vec![])),
    ];

    for (tag, value) in cases {
        let decl = Declaration::new().declare("param1", tag);
        let snap = Snapshot::new().bind("param1", value);
        assert_eq!(accepts_with(&decl, &snap, RAISE), Ok(()), "tag {}", tag);
    }
}

#[test]
fn rejects_every_scalar_against_a_different_tag() {
    let decl = declare! { param1: TypeTag::Int };
    let snap = snapshot! { param1 => "abc" };

    let err = accepts_with(&decl, &snap, RAISE).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::IncorrectArgumentType);
    assert!(err.message().contains("param1"));
    assert!(err.message().contains("Int"));
    assert!(err.message().contains("String"));
}

#[test]
fn reports_exactly_the_extra_names() {
    let decl = declare! { param1: TypeTag::String };
    let snap = snapshot! { param1 => "foo", extra_a => 1, extra_b => 2 };

    let err = accepts_with(&decl, &snap, RAISE).unwrap_err();

    assert_eq!(
        err,
        AttestError::UndeclaredArgument("Undeclared arguments: [extra_a, extra_b]".into())
    );
}

#[test]
fn reports_declared_names_missing_from_the_snapshot() {
    let decl = declare! { param1: TypeTag::String, param2: TypeTag::Int };
    let snap = snapshot! { param1 => "foo" };

    let err = accepts_with(&decl, &snap, RAISE).unwrap_err();

    assert_eq!(
        err,
        AttestError::UndeclaredArgument("Missing arguments: [param2]".into())
    );
}

#[test]
fn undeclared_names_reported_before_type_mismatches() {
    // Both an undeclared name and a type mismatch are present; the
    // undeclared check runs first, so it is the one that raises.
    let decl = declare! { param1: TypeTag::Int };
    let snap = snapshot! { param1 => "foo", extra => 1 };

    let err = accepts_with(&decl, &snap, RAISE).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UndeclaredArgument);
}

#[test]
fn a_passing_call_has_no_observable_effect() {
    let decl = declare! {
        title: TypeTag::String,
        count: [TypeTag::Int, TypeTag::Null],
    };

    assert!(accepts_with(&decl, &snapshot! { title => "a", count => 1 }, RAISE).is_ok());
    assert!(
        accepts_with(&decl, &snapshot! { title => "a", count => Value::Null }, RAISE).is_ok()
    );
}
