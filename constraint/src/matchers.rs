//! Built-in matcher factories.
//!
//! Each factory returns a [`Constraint::Matcher`] closed over its
//! configuration. Matchers short-circuit only on the wrong-container case
//! (one violation, then stop); otherwise they enumerate every per-element,
//! per-key, or per-capability violation and leave abort-on-first entirely
//! to the dispatcher's raise handling.

use attest_core::{messages, ErrorKind, TypeTag};
use attest_notify::notify;

use crate::constraint::{Constraint, Matcher};

/// Match a sequence whose element types are exactly the given set.
///
/// The set of distinct runtime types present in the sequence must equal the
/// declared set, order-independent. This is deliberately **not** a subset
/// check: `sequence_of([String, Null])` rejects `["a", "b"]` because no
/// `Null` element is present. Surprising, but it is the contract this layer
/// has always had; declare only the types you expect to actually occur.
pub fn sequence_of(allowed: impl IntoIterator<Item = TypeTag>) -> Constraint {
    let allowed: Vec<TypeTag> = allowed.into_iter().collect();
    Constraint::Matcher(Matcher::new("sequence_of", move |name, value, mode_override| {
        let items = match value.as_seq() {
            Some(items) => items,
            None => {
                return notify(
                    mode_override,
                    ErrorKind::IncorrectArgumentType,
                    messages::sequence_expected(name, value),
                )
            }
        };

        // Distinct tags in order of first appearance, for the message.
        let mut actual: Vec<TypeTag> = Vec::new();
        for item in items {
            let tag = item.type_tag();
            if !actual.contains(&tag) {
                actual.push(tag);
            }
        }

        if !same_tag_set(&allowed, &actual) {
            return notify(
                mode_override,
                ErrorKind::IncorrectArgumentType,
                messages::sequence_content(name, &allowed, &actual),
            );
        }
        Ok(())
    }))
}

/// Match a mapping that has at least the given keys. Extra keys are always
/// permitted; one violation is issued per missing key.
pub fn mapping_with<I, S>(keys: I) -> Constraint
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected: Vec<String> = keys.into_iter().map(Into::into).collect();
    Constraint::Matcher(Matcher::new("mapping_with", move |name, value, mode_override| {
        let entries = match value.as_map() {
            Some(entries) => entries,
            None => {
                return notify(
                    mode_override,
                    ErrorKind::IncorrectArgumentType,
                    messages::mapping_expected(name, value),
                )
            }
        };

        for key in &expected {
            if !entries.iter().any(|(k, _)| k == key) {
                notify(
                    mode_override,
                    ErrorKind::IncorrectArgumentType,
                    messages::mapping_missing_key(name, key),
                )?;
            }
        }
        Ok(())
    }))
}

/// Match an object that responds to each of the given operations. One
/// violation is issued per missing capability.
pub fn with_capabilities<I, S>(operations: I) -> Constraint
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let expected: Vec<String> = operations.into_iter().map(Into::into).collect();
    Constraint::Matcher(Matcher::new(
        "with_capabilities",
        move |name, value, mode_override| {
            let object = match value.as_object() {
                Some(object) => object,
                None => {
                    return notify(
                        mode_override,
                        ErrorKind::IncorrectArgumentType,
                        messages::object_expected(name, value),
                    )
                }
            };

            for operation in &expected {
                if !object.responds_to(operation) {
                    notify(
                        mode_override,
                        ErrorKind::IncorrectArgumentType,
                        messages::capability_missing(name, operation),
                    )?;
                }
            }
            Ok(())
        },
    ))
}

/// Order-independent tag set comparison.
fn same_tag_set(allowed: &[TypeTag], actual: &[TypeTag]) -> bool {
    let mut want = allowed.to_vec();
    want.sort();
    want.dedup();
    let mut got = actual.to_vec();
    got.sort();
    want == got
}
