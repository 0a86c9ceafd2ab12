//! Constraint model.

use std::fmt;
use std::sync::Arc;

use attest_core::{messages, AttestResult, ErrorKind, TypeTag, Value};
use attest_notify::{notify, Mode};

/// The check function inside a [`Matcher`].
///
/// Receives the argument name, the bound value, and the call's mode
/// override; reports each sub-violation through the dispatcher itself.
pub type MatcherFn = dyn Fn(&str, &Value, Option<Mode>) -> AttestResult<()> + Send + Sync;

/// An opaque predicate-with-reporting used as a constraint.
///
/// A matcher does not return pass/fail to the engine: it dispatches its own
/// violations, so in warn mode a single matcher may produce several log
/// lines while the call still returns `Ok`.
#[derive(Clone)]
pub struct Matcher {
    name: &'static str,
    check: Arc<MatcherFn>,
}

impl Matcher {
    /// Create a matcher with a diagnostic name and a check function.
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&str, &Value, Option<Mode>) -> AttestResult<()> + Send + Sync + 'static,
    {
        Self {
            name,
            check: Arc::new(check),
        }
    }

    /// The matcher's diagnostic name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the matcher against one bound value.
    pub fn check(
        &self,
        argument_name: &str,
        value: &Value,
        mode_override: Option<Mode>,
    ) -> AttestResult<()> {
        (self.check)(argument_name, value, mode_override)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher").field("name", &self.name).finish()
    }
}

/// A declared constraint on one argument.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// The value's runtime type must equal the tag.
    Exact(TypeTag),
    /// The value's runtime type must be one of the listed tags.
    Union(Vec<TypeTag>),
    /// Delegate to a matcher, which reports its own violations.
    Matcher(Matcher),
}

impl Constraint {
    /// Render what this constraint expects, for violation messages.
    pub fn expected(&self) -> String {
        match self {
            Constraint::Exact(tag) => tag.to_string(),
            Constraint::Union(tags) => messages::list(tags),
            Constraint::Matcher(m) => m.name().to_string(),
        }
    }

    /// Check one bound value against this constraint.
    ///
    /// Exact and union failures issue one `IncorrectArgumentType`
    /// notification; matchers dispatch their own. An `Err` return means the
    /// effective mode was `Raise` and the violation aborts the call.
    pub fn check(
        &self,
        argument_name: &str,
        value: &Value,
        mode_override: Option<Mode>,
    ) -> AttestResult<()> {
        match self {
            Constraint::Exact(tag) => {
                if value.type_tag() != *tag {
                    return notify(
                        mode_override,
                        ErrorKind::IncorrectArgumentType,
                        messages::incorrect_argument_type(
                            argument_name,
                            &self.expected(),
                            value.type_tag(),
                        ),
                    );
                }
                Ok(())
            }
            Constraint::Union(tags) => {
                if !tags.contains(&value.type_tag()) {
                    return notify(
                        mode_override,
                        ErrorKind::IncorrectArgumentType,
                        messages::incorrect_argument_type(
                            argument_name,
                            &self.expected(),
                            value.type_tag(),
                        ),
                    );
                }
                Ok(())
            }
            Constraint::Matcher(matcher) => matcher.check(argument_name, value, mode_override),
        }
    }
}

impl From<TypeTag> for Constraint {
    fn from(tag: TypeTag) -> Self {
        Constraint::Exact(tag)
    }
}

impl From<Vec<TypeTag>> for Constraint {
    fn from(tags: Vec<TypeTag>) -> Self {
        Constraint::Union(tags)
    }
}

impl<const N: usize> From<[TypeTag; N]> for Constraint {
    fn from(tags: [TypeTag; N]) -> Self {
        Constraint::Union(tags.to_vec())
    }
}

impl From<Matcher> for Constraint {
    fn from(matcher: Matcher) -> Self {
        Constraint::Matcher(matcher)
    }
}
