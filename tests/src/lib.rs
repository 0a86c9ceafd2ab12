//! Test harness for exercising the process-wide failure policy.
//!
//! The global mode and logger are shared by every test in a binary, so all
//! manipulation goes through [`with_global_mode`], which serializes access
//! and restores the defaults afterwards.

use std::sync::{Arc, Mutex, PoisonError};

use attest_notify::{set_logger, set_mode, MemoryLogger, Mode, StderrLogger};

static GUARD: Mutex<()> = Mutex::new(());

/// Run `f` with the global mode set and a fresh recording logger installed.
///
/// Holds a process-wide lock for the duration and restores the default
/// configuration (raise mode, stderr logger) before returning.
pub fn with_global_mode(mode: Mode, f: impl FnOnce(&Arc<MemoryLogger>)) {
    let _guard = GUARD.lock().unwrap_or_else(PoisonError::into_inner);
    let logger = Arc::new(MemoryLogger::new());
    set_mode(mode);
    set_logger(logger.clone());

    f(&logger);

    set_mode(Mode::Raise);
    set_logger(Arc::new(StderrLogger));
}
