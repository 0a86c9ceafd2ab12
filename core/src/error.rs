//! Common error types for attest.

use std::fmt;
use thiserror::Error;

/// The kind of a violation or configuration error.
///
/// Every error attest produces belongs to exactly one kind; warnings logged
/// in warn mode are prefixed with the kind name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The declaration itself is malformed (duplicate names, empty union).
    /// Always raised, never subject to the failure policy.
    InvalidDeclaration,
    /// A value did not satisfy its declared constraint.
    IncorrectArgumentType,
    /// A snapshot name was not declared, or a declared name was not bound.
    UndeclaredArgument,
}

impl ErrorKind {
    /// Returns the display name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidDeclaration => "InvalidDeclaration",
            ErrorKind::IncorrectArgumentType => "IncorrectArgumentType",
            ErrorKind::UndeclaredArgument => "UndeclaredArgument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced by validation.
///
/// This is the base category shared by all attest failures; the variant
/// carries the kind and the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttestError {
    /// The declaration itself is malformed.
    #[error("InvalidDeclaration: {0}")]
    InvalidDeclaration(String),

    /// A value did not satisfy its declared constraint.
    #[error("IncorrectArgumentType: {0}")]
    IncorrectArgumentType(String),

    /// A snapshot name was not declared, or a declared name was not bound.
    #[error("UndeclaredArgument: {0}")]
    UndeclaredArgument(String),
}

impl AttestError {
    /// Construct an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::InvalidDeclaration => Self::InvalidDeclaration(message),
            ErrorKind::IncorrectArgumentType => Self::IncorrectArgumentType(message),
            ErrorKind::UndeclaredArgument => Self::UndeclaredArgument(message),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDeclaration(_) => ErrorKind::InvalidDeclaration,
            Self::IncorrectArgumentType(_) => ErrorKind::IncorrectArgumentType,
            Self::UndeclaredArgument(_) => ErrorKind::UndeclaredArgument,
        }
    }

    /// Returns the message, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidDeclaration(m)
            | Self::IncorrectArgumentType(m)
            | Self::UndeclaredArgument(m) => m,
        }
    }
}

/// Result type for validation operations.
pub type AttestResult<T> = Result<T, AttestError>;
