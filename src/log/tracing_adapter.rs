//! Tracing library adapter implementation.

use crate::log::{Field, LogLevel, Logger};
use std::fmt::Write;

/// Logger implementation that delegates to the `tracing` crate.
///
/// This adapter bridges the [`Logger`] trait to the `tracing` ecosystem,
/// allowing records to flow into whatever subscriber the host application
/// installed (console, file, JSON) while callers stay decoupled from
/// `tracing` itself.
///
/// Fields are flattened into the message as space-separated `key=value`
/// pairs, since the field set varies per record and `tracing` expects
/// field names to be known at the call site.
///
/// # Example
///
/// ```
/// use truss_eventlog::log::{Field, Logger, TracingLogger};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized.
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
/// logger.debug("cache warmed", &[Field::int("entries", 128)]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Create a new tracing logger adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, fields: &[Field]) {
        let line = render(message, fields);
        match level {
            LogLevel::Trace => tracing::trace!("{}", line),
            LogLevel::Debug => tracing::debug!("{}", line),
            LogLevel::Info => tracing::info!("{}", line),
            LogLevel::Warn => tracing::warn!("{}", line),
            LogLevel::Error => tracing::error!("{}", line),
        }
    }
}

/// Flattens a message and its fields into a single text line.
fn render(message: &str, fields: &[Field]) -> String {
    let mut line = String::from(message);
    for field in fields {
        // Write into a String cannot fail.
        let _ = write!(line, " {}", field);
    }
    line
}
