//! Logger trait definition.

use crate::log::Field;

/// Log level for structured records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Verbose debugging information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

/// Structured logging interface.
///
/// A record is a level, a message, and an ordered list of typed named
/// fields. Implementations decide how records are formatted and where they
/// go; callers stay decoupled from any specific logging backend.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use truss_eventlog::log::{Field, Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.debug("cache warmed", &[Field::int("entries", 128)]);
/// ```
pub trait Logger: Send + Sync {
    /// Records a message with fields at the specified level.
    ///
    /// This is the core method that implementations must provide. The
    /// convenience methods (`debug`, `error`) delegate to this method.
    fn log(&self, level: LogLevel, message: &str, fields: &[Field]);

    /// Records a debug-level message.
    fn debug(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Debug, message, fields);
    }

    /// Records an error-level message.
    fn error(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Error, message, fields);
    }
}
