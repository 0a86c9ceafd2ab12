//! The validation engine.

use attest_constraint::Declaration;
use attest_core::{messages, AttestResult, ErrorKind, Snapshot};
use attest_notify::{notify, Mode};

/// Validate a snapshot against a declaration under the process-wide mode.
///
/// Equivalent to [`accepts_with`] with no override.
pub fn accepts(declaration: &Declaration, snapshot: &Snapshot) -> AttestResult<()> {
    accepts_with(declaration, snapshot, None)
}

/// Validate a snapshot against a declaration, optionally overriding the
/// failure mode for this call.
///
/// Checks run in a fixed order:
/// 1. Declaration well-formedness. A malformed declaration is a programmer
///    error and raises `InvalidDeclaration` unconditionally, whatever the
///    mode.
/// 2. Snapshot names missing from the declaration: one
///    `UndeclaredArgument` notification listing them in snapshot order.
/// 3. Declared names missing from the snapshot: one `UndeclaredArgument`
///    notification listing them in declaration order.
/// 4. Each declared constraint against its bound value, in declaration
///    order; names already reported missing are skipped.
///
/// Under `Mode::Raise` the first notification aborts the call, so only the
/// first violation in the order above is visible. Under `Mode::Warn`
/// nothing aborts: every violation is logged and the call returns `Ok`, so
/// the caller proceeds with the invalid values.
pub fn accepts_with(
    declaration: &Declaration,
    snapshot: &Snapshot,
    mode_override: Option<Mode>,
) -> AttestResult<()> {
    declaration.ensure_well_formed()?;

    let undeclared: Vec<&str> = snapshot
        .names()
        .filter(|name| !declaration.contains(name))
        .collect();
    if !undeclared.is_empty() {
        notify(
            mode_override,
            ErrorKind::UndeclaredArgument,
            messages::undeclared_arguments(&undeclared),
        )?;
    }

    let missing: Vec<&str> = declaration
        .names()
        .filter(|name| !snapshot.contains(name))
        .collect();
    if !missing.is_empty() {
        notify(
            mode_override,
            ErrorKind::UndeclaredArgument,
            messages::missing_arguments(&missing),
        )?;
    }

    for (name, constraint) in declaration.iter() {
        let value = match snapshot.get(name) {
            Some(value) => value,
            None => continue,
        };
        constraint.check(name, value, mode_override)?;
    }

    Ok(())
}
