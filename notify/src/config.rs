//! Failure-policy configuration.
//!
//! A [`Config`] pairs a [`Mode`] with a logger. One process-wide instance
//! backs the [`set_mode`]/[`set_logger`] setters and is read on every
//! violation; callers that want to avoid shared mutable state should pass a
//! per-call mode override through `accepts_with` instead of mutating it.

use std::sync::{Arc, PoisonError, RwLock};

use lazy_static::lazy_static;

use crate::logger::{StderrLogger, WarnLogger};

/// Disposition of a violation.
///
/// Unknown modes are unrepresentable: the enum is closed, so the
/// misconfiguration path of a stringly-typed mode cannot arise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Hard failure: the first violation aborts the validation call.
    #[default]
    Raise,
    /// Soft failure: every violation is logged and the call proceeds.
    Warn,
}

/// Failure-policy configuration: a mode plus a warn sink.
#[derive(Clone)]
pub struct Config {
    mode: Mode,
    logger: Arc<dyn WarnLogger>,
}

impl Config {
    /// Create a configuration with an explicit mode and logger.
    pub fn new(mode: Mode, logger: Arc<dyn WarnLogger>) -> Self {
        Self { mode, logger }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Replace the mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Current logger.
    pub fn logger(&self) -> Arc<dyn WarnLogger> {
        Arc::clone(&self.logger)
    }

    /// Replace the logger.
    pub fn set_logger(&mut self, logger: Arc<dyn WarnLogger>) {
        self.logger = logger;
    }
}

impl Default for Config {
    /// Raise on violations; warnings (if warn mode is selected later) go to
    /// the process's diagnostic stream.
    fn default() -> Self {
        Self::new(Mode::Raise, Arc::new(StderrLogger))
    }
}

lazy_static! {
    static ref GLOBAL: RwLock<Config> = RwLock::new(Config::default());
}

pub(crate) fn global() -> Config {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Set the process-wide failure mode.
pub fn set_mode(mode: Mode) {
    GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set_mode(mode);
}

/// The process-wide failure mode.
pub fn mode() -> Mode {
    global().mode()
}

/// Replace the process-wide warn logger.
pub fn set_logger(logger: Arc<dyn WarnLogger>) {
    GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set_logger(logger);
}

/// The process-wide warn logger.
pub fn logger() -> Arc<dyn WarnLogger> {
    global().logger()
}
