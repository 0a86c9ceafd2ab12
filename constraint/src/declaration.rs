//! Declarations.

use attest_core::{messages, AttestError, AttestResult};

use crate::constraint::Constraint;

/// A routine's declared argument shapes: name -> constraint, in declaration
/// order. Order determines the order violations are reported in, not the
/// outcome (violations are independent of each other).
#[derive(Debug, Clone, Default)]
pub struct Declaration {
    entries: Vec<(String, Constraint)>,
}

impl Declaration {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declared argument.
    ///
    /// Duplicates are kept here and rejected by
    /// [`ensure_well_formed`](Self::ensure_well_formed), so a bad
    /// declaration fails at validation time with a declaration error rather
    /// than silently dropping an entry.
    pub fn insert(&mut self, name: impl Into<String>, constraint: impl Into<Constraint>) {
        self.entries.push((name.into(), constraint.into()));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn declare(mut self, name: impl Into<String>, constraint: impl Into<Constraint>) -> Self {
        self.insert(name, constraint);
        self
    }

    /// Look up the constraint for a name.
    pub fn get(&self, name: &str) -> Option<&Constraint> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Returns true if the name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterate declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Constraint)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Number of declared arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject malformed declarations: duplicate argument names and empty
    /// unions. These are defects in how validation was wired up, so they
    /// are hard errors regardless of the failure mode, checked before any
    /// value is inspected.
    pub fn ensure_well_formed(&self) -> AttestResult<()> {
        for (i, (name, constraint)) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|(n, _)| n == name) {
                return Err(AttestError::InvalidDeclaration(
                    messages::duplicate_argument(name),
                ));
            }
            if let Constraint::Union(tags) = constraint {
                if tags.is_empty() {
                    return Err(AttestError::InvalidDeclaration(messages::empty_union(name)));
                }
            }
        }
        Ok(())
    }
}

/// Build a [`Declaration`] from `name: constraint` pairs.
///
/// A constraint may be a [`TypeTag`](attest_core::TypeTag) (exact type), an
/// array of tags (union), or a matcher such as
/// [`sequence_of`](crate::sequence_of).
///
/// ```
/// use attest_constraint::{declare, sequence_of};
/// use attest_core::TypeTag;
///
/// let decl = declare! {
///     title: TypeTag::String,
///     count: [TypeTag::Int, TypeTag::Null],
///     tags: sequence_of([TypeTag::String]),
/// };
/// assert_eq!(decl.len(), 3);
/// ```
#[macro_export]
macro_rules! declare {
    () => {
        $crate::Declaration::new()
    };
    ($($name:ident : $constraint:expr),+ $(,)?) => {{
        let mut decl = $crate::Declaration::new();
        $(
            decl.insert(stringify!($name), $crate::Constraint::from($constraint));
        )+
        decl
    }};
}
