//! Attest Notify
//!
//! The failure-policy dispatcher. Every violation the engine or a matcher
//! detects is routed through [`notify`], which consults the effective mode
//! (per-call override first, process-wide configuration second) and either
//! raises the violation as an error or writes it to the configured logger.
//!
//! Responsibilities:
//! - Hold the process-wide `Config` (mode + logger) behind a lock
//! - Resolve per-call mode overrides against the global mode
//! - Turn a violation into a hard failure (`Raise`) or a log line (`Warn`)

mod config;
mod dispatch;
mod logger;

pub use config::{logger, mode, set_logger, set_mode, Config, Mode};
pub use dispatch::notify;
pub use logger::{FacadeLogger, MemoryLogger, StderrLogger, WarnLogger};
