//! Shared violation message builders.
//!
//! These keep wording consistent between the engine and the matcher library,
//! and give the tests one place to assert against.

use std::fmt::Display;

use crate::{TypeTag, Value};

/// Render a list of displayable items as `[a, b, c]`.
pub fn list<T: Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

/// A value did not satisfy an exact-type or union constraint.
pub fn incorrect_argument_type(name: &str, expected: &str, actual: TypeTag) -> String {
    format!(
        "Expected argument '{}' to be a '{}', but got '{}'",
        name, expected, actual
    )
}

/// Snapshot names missing from the declaration.
pub fn undeclared_arguments(names: &[&str]) -> String {
    format!("Undeclared arguments: {}", list(names))
}

/// Declared names missing from the snapshot.
pub fn missing_arguments(names: &[&str]) -> String {
    format!("Missing arguments: {}", list(names))
}

/// A declaration names the same argument twice.
pub fn duplicate_argument(name: &str) -> String {
    format!(
        "Invalid declaration: argument '{}' is declared more than once",
        name
    )
}

/// A union constraint lists no types, so nothing could ever satisfy it.
pub fn empty_union(name: &str) -> String {
    format!(
        "Invalid declaration: union for argument '{}' lists no types",
        name
    )
}

/// A `sequence_of` matcher was handed a non-sequence.
pub fn sequence_expected(name: &str, value: &Value) -> String {
    format!(
        "Expected a sequence to be passed as argument '{}', but got '{}'",
        name, value
    )
}

/// A sequence's element types differ from the declared type set.
pub fn sequence_content(name: &str, allowed: &[TypeTag], actual: &[TypeTag]) -> String {
    format!(
        "Expected sequence passed as argument '{}' to contain only '{}', but got '{}'",
        name,
        list(allowed),
        list(actual)
    )
}

/// A `mapping_with` matcher was handed a non-mapping.
pub fn mapping_expected(name: &str, value: &Value) -> String {
    format!(
        "Expected a mapping to be passed as argument '{}', but got '{}'",
        name, value
    )
}

/// A mapping lacks one of the declared keys.
pub fn mapping_missing_key(name: &str, key: &str) -> String {
    format!(
        "Expected mapping passed as argument '{}' to have key '{}', but it did not",
        name, key
    )
}

/// A `with_capabilities` matcher was handed a non-object.
pub fn object_expected(name: &str, value: &Value) -> String {
    format!(
        "Expected an object to be passed as argument '{}', but got '{}'",
        name, value
    )
}

/// An object does not respond to one of the declared operations.
pub fn capability_missing(name: &str, operation: &str) -> String {
    format!(
        "Expected object passed as argument '{}' to respond to '.{}', but it did not",
        name, operation
    )
}
