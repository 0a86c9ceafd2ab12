//! Matcher behavior through the full engine, per-call raise mode.

use attest_engine::{
    accepts_with, declare, mapping_with, map, seq, sequence_of, snapshot, with_capabilities,
    Capabilities, Mode, TypeTag, Value,
};

const RAISE: Option<Mode> = Some(Mode::Raise);

#[test]
fn sequence_of_passes_uniform_content() {
    let decl = declare! { tags: sequence_of([TypeTag::String]) };
    let snap = snapshot! { tags => seq!["a", "b"] };

    assert!(accepts_with(&decl, &snap, RAISE).is_ok());
}

#[test]
fn sequence_of_lists_allowed_and_actual_types() {
    let decl = declare! { tags: sequence_of([TypeTag::String]) };
    let snap = snapshot! { tags => seq!["a", 1] };

    let err = accepts_with(&decl, &snap, RAISE).unwrap_err();

    assert_eq!(
        err.message(),
        "Expected sequence passed as argument 'tags' to contain only \
         '[String]', but got '[String, Int]'"
    );
}

#[test]
fn sequence_of_requires_every_declared_type_to_appear() {
    // Exact-set semantics: [String, Null] demands that a Null element is
    // actually present, not merely allowed.
    let decl = declare! { tags: sequence_of([TypeTag::String, TypeTag::Null]) };
    let snap = snapshot! { tags => seq!["a", "b"] };

    assert!(accepts_with(&decl, &snap, RAISE).is_err());

    let with_null = snapshot! { tags => seq!["a", Value::Null] };
    assert!(accepts_with(&decl, &with_null, RAISE).is_ok());
}

#[test]
fn mapping_with_permits_extra_keys() {
    let decl = declare! { opts: mapping_with(["a", "b"]) };
    let snap = snapshot! { opts => map! { a => 1, b => 2, c => 3 } };

    assert!(accepts_with(&decl, &snap, RAISE).is_ok());
}

#[test]
fn mapping_with_names_the_missing_key() {
    let decl = declare! { opts: mapping_with(["a", "b"]) };
    let snap = snapshot! { opts => map! { a => 1 } };

    let err = accepts_with(&decl, &snap, RAISE).unwrap_err();

    assert_eq!(
        err.message(),
        "Expected mapping passed as argument 'opts' to have key 'b', but it did not"
    );
}

#[test]
fn with_capabilities_accepts_any_responding_object() {
    let decl = declare! { widget: with_capabilities(["render"]) };
    let snap = snapshot! {
        widget => Value::object(Capabilities::new(["render", "resize"]))
    };

    assert!(accepts_with(&decl, &snap, RAISE).is_ok());
}

#[test]
fn with_capabilities_names_the_missing_operation() {
    let decl = declare! { widget: with_capabilities(["render"]) };
    let snap = snapshot! { widget => Value::object(Capabilities::new(["resize"])) };

    let err = accepts_with(&decl, &snap, RAISE).unwrap_err();

    assert_eq!(
        err.message(),
        "Expected object passed as argument 'widget' to respond to '.render', but it did not"
    );
}

#[test]
fn custom_capable_implementations_work() {
    struct Renderer;

    impl attest_engine::Capable for Renderer {
        fn responds_to(&self, operation: &str) -> bool {
            operation == "render"
        }
    }

    let decl = declare! { widget: with_capabilities(["render"]) };
    let snap = snapshot! { widget => Value::object(Renderer) };

    assert!(accepts_with(&decl, &snap, RAISE).is_ok());
}

#[test]
fn wrong_container_kind_is_reported_once() {
    let decl = declare! { opts: mapping_with(["a", "b", "c"]) };
    let snap = snapshot! { opts => Value::Null };

    let err = accepts_with(&decl, &snap, RAISE).unwrap_err();

    // One violation for the container kind, not one per expected key.
    assert_eq!(
        err.message(),
        "Expected a mapping to be passed as argument 'opts', but got 'null'"
    );
}
