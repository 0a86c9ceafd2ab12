//! Attest Constraint
//!
//! The vocabulary of argument constraints and the matcher library.
//!
//! Responsibilities:
//! - Model a constraint as a closed tagged union: exact type, type union,
//!   or opaque matcher
//! - Evaluate one value against one constraint, routing failures through
//!   the failure-policy dispatcher
//! - Provide the built-in matcher factories (`sequence_of`, `mapping_with`,
//!   `with_capabilities`)
//! - Hold declarations (name -> constraint, in declaration order)

mod constraint;
mod declaration;
mod matchers;

pub use constraint::{Constraint, Matcher};
pub use declaration::Declaration;
pub use matchers::{mapping_with, sequence_of, with_capabilities};
