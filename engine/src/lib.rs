//! Attest Engine
//!
//! Declarative runtime argument validation. A routine declares the expected
//! type or shape of each parameter, builds a snapshot of its bound values,
//! and calls [`accepts`], the single entry point, once at the top:
//!
//! ```
//! use attest_core::snapshot;
//! use attest_core::TypeTag;
//! use attest_engine::{accepts, declare, sequence_of};
//!
//! fn publish(title: &str, tags: Vec<String>) -> Result<(), attest_core::AttestError> {
//!     accepts(
//!         &declare! {
//!             title: TypeTag::String,
//!             tags: sequence_of([TypeTag::String]),
//!         },
//!         &snapshot! {
//!             title => title,
//!             tags => tags
//!                 .iter()
//!                 .map(|t| attest_core::Value::from(t.as_str()))
//!                 .collect::<Vec<_>>(),
//!         },
//!     )?;
//!     // ... the routine proper ...
//!     Ok(())
//! }
//!
//! publish("hello", vec!["a".into()]).unwrap();
//! ```
//!
//! Violations are routed through the failure policy: in [`Mode::Raise`]
//! (the default) the first violation aborts the call with an error; in
//! [`Mode::Warn`] every violation is logged and the routine proceeds with
//! the invalid values. The mode is process-wide ([`set_mode`]) with a
//! per-call override ([`accepts_with`]), which is the preferred way to vary
//! the policy.

mod accepts;

pub use accepts::{accepts, accepts_with};

pub use attest_constraint::{
    declare, mapping_with, sequence_of, with_capabilities, Constraint, Declaration, Matcher,
};
pub use attest_core::{
    map, seq, snapshot, AttestError, AttestResult, Capabilities, Capable, ErrorKind, Snapshot,
    TypeTag, Value,
};
pub use attest_notify::{
    logger, mode, notify, set_logger, set_mode, Config, FacadeLogger, MemoryLogger, Mode,
    StderrLogger, WarnLogger,
};
