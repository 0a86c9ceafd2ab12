//! Warning sinks for warn-mode violations.

use std::sync::Mutex;

/// A sink for warn-mode violation messages.
///
/// The trait bound replaces the duck-typed "responds to `warn`" check: any
/// logger accepted by [`set_logger`](crate::set_logger) is warn-capable by
/// construction.
pub trait WarnLogger: Send + Sync {
    /// Record one formatted violation message.
    fn warn(&self, message: &str);
}

/// Default logger: writes each warning to the process's diagnostic stream.
#[derive(Debug, Default)]
pub struct StderrLogger;

impl WarnLogger for StderrLogger {
    fn warn(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Logger that forwards warnings to the `log` facade, for applications that
/// already have a `log` backend installed.
#[derive(Debug, Default)]
pub struct FacadeLogger;

impl WarnLogger for FacadeLogger {
    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }
}

/// Logger that records warnings in memory. Test support.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: Mutex<Vec<String>>,
}

impl MemoryLogger {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Discard recorded messages.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl WarnLogger for MemoryLogger {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}
