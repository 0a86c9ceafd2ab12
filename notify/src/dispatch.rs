//! Violation dispatch.

use attest_core::{AttestError, AttestResult, ErrorKind};

use crate::config::{global, Mode};

/// Route one violation through the failure policy.
///
/// The effective mode is the per-call override when present, otherwise the
/// process-wide mode. `Raise` turns the violation into an error of `kind`;
/// `Warn` writes `"<kind>: <message>"` to the configured logger and returns
/// normally, so the caller proceeds with the invalid value. That is a policy
/// choice, not a bug: warn mode exists to surface violations without
/// changing control flow.
///
/// In raise mode the logger is never touched.
pub fn notify(
    mode_override: Option<Mode>,
    kind: ErrorKind,
    message: impl Into<String>,
) -> AttestResult<()> {
    let config = global();
    match mode_override.unwrap_or(config.mode()) {
        Mode::Raise => Err(AttestError::new(kind, message)),
        Mode::Warn => {
            config.logger().warn(&format!("{}: {}", kind, message.into()));
            Ok(())
        }
    }
}
