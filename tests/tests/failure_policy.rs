//! Failure-policy behavior: global mode, per-call overrides, and warn-mode
//! logging. Every test goes through the shared harness because the mode and
//! logger are process-wide.

use attest_engine::{
    accepts, accepts_with, declare, mapping_with, snapshot, with_capabilities, Capabilities,
    ErrorKind, Mode, TypeTag, Value,
};
use attest_tests::with_global_mode;

#[test]
fn global_raise_aborts_on_first_violation_and_logs_nothing() {
    with_global_mode(Mode::Raise, |logger| {
        let decl = declare! { param1: TypeTag::Null, param2: TypeTag::Null };
        let snap = snapshot! { param1 => "foo", param2 => 1234 };

        let err = accepts(&decl, &snap).unwrap_err();

        assert!(err.message().contains("param1"));
        assert!(logger.messages().is_empty());
    });
}

#[test]
fn global_warn_reports_every_violation_and_returns_ok() {
    with_global_mode(Mode::Warn, |logger| {
        let decl = declare! { param1: TypeTag::Null, param2: TypeTag::Null };
        let snap = snapshot! { param1 => "foo", param2 => 1234 };

        // The call proceeds despite the invalid values; that is the
        // documented warn-mode contract.
        assert_eq!(accepts(&decl, &snap), Ok(()));

        assert_eq!(
            logger.messages(),
            vec![
                "IncorrectArgumentType: Expected argument 'param1' to be a \
                 'Null', but got 'String'",
                "IncorrectArgumentType: Expected argument 'param2' to be a \
                 'Null', but got 'Int'",
            ]
        );
    });
}

#[test]
fn global_warn_logs_undeclared_and_mismatch_together() {
    with_global_mode(Mode::Warn, |logger| {
        let decl = declare! { param1: TypeTag::Int };
        let snap = snapshot! { param1 => "foo", extra => 1 };

        assert_eq!(accepts(&decl, &snap), Ok(()));

        let messages = logger.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "UndeclaredArgument: Undeclared arguments: [extra]");
        assert!(messages[1].starts_with("IncorrectArgumentType:"));
    });
}

#[test]
fn warn_override_suppresses_a_global_raise() {
    with_global_mode(Mode::Raise, |logger| {
        let decl = declare! { param1: TypeTag::Null };
        let snap = snapshot! { param1 => "foo" };

        assert_eq!(accepts_with(&decl, &snap, Some(Mode::Warn)), Ok(()));
        assert_eq!(logger.messages().len(), 1);
    });
}

#[test]
fn raise_override_wins_over_a_global_warn() {
    with_global_mode(Mode::Warn, |logger| {
        let decl = declare! { param1: TypeTag::Null };
        let snap = snapshot! { param1 => "foo" };

        let err = accepts_with(&decl, &snap, Some(Mode::Raise)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::IncorrectArgumentType);
        assert!(logger.messages().is_empty());
    });
}

#[test]
fn warn_mode_enumerates_every_missing_key() {
    with_global_mode(Mode::Warn, |logger| {
        let decl = declare! { opts: mapping_with(["a", "b", "c"]) };
        let snap = snapshot! { opts => attest_engine::map! {} };

        assert_eq!(accepts(&decl, &snap), Ok(()));

        assert_eq!(
            logger.messages(),
            vec![
                "IncorrectArgumentType: Expected mapping passed as argument \
                 'opts' to have key 'a', but it did not",
                "IncorrectArgumentType: Expected mapping passed as argument \
                 'opts' to have key 'b', but it did not",
                "IncorrectArgumentType: Expected mapping passed as argument \
                 'opts' to have key 'c', but it did not",
            ]
        );
    });
}

#[test]
fn warn_mode_enumerates_every_missing_capability() {
    with_global_mode(Mode::Warn, |logger| {
        let decl = declare! { widget: with_capabilities(["render", "resize"]) };
        let snap = snapshot! { widget => Value::object(Capabilities::new(["rotate"])) };

        assert_eq!(accepts(&decl, &snap), Ok(()));
        assert_eq!(logger.messages().len(), 2);
    });
}

#[test]
fn malformed_declaration_raises_even_under_global_warn() {
    with_global_mode(Mode::Warn, |logger| {
        let decl = attest_engine::Declaration::new()
            .declare("param1", TypeTag::String)
            .declare("param1", TypeTag::Int);
        let snap = snapshot! { param1 => "foo" };

        let err = accepts(&decl, &snap).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidDeclaration);
        assert!(logger.messages().is_empty());
    });
}
