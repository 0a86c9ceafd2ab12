//! Attest Core Types
//!
//! This crate provides the foundational types used throughout the attest
//! system:
//! - Value types (the `Value` enum covering every runtime shape a snapshot
//!   can hold) and their `TypeTag` runtime type identifiers
//! - The `Capable` trait for capability (responds-to) checks
//! - Snapshot structures (the name -> value bindings for one call)
//! - The shared error taxonomy (`AttestError`, `ErrorKind`)
//! - Message builders shared by the engine and the matcher library

mod error;
pub mod messages;
mod snapshot;
mod value;

pub use error::*;
pub use snapshot::*;
pub use value::*;
