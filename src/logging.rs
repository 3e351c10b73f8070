//! Console logging setup for binaries embedding the event logger.
//!
//! Installs a global `tracing` subscriber so [`TracingLogger`] records reach
//! the terminal:
//! - Single-line fmt output to stdout
//! - Configurable via the RUST_LOG environment variable
//! - Defaults to `info` when RUST_LOG is not set
//!
//! Library users with their own subscriber should skip this module entirely;
//! [`TracingLogger`] emits through whatever subscriber is current.
//!
//! [`TracingLogger`]: crate::log::TracingLogger

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global subscriber was already installed by this process.
    #[error("global tracing subscriber already set: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Initialize console logging with the RUST_LOG filter.
///
/// Falls back to the `info` level when RUST_LOG is unset or unparseable.
///
/// # Errors
///
/// Returns [`LoggingError::AlreadyInitialized`] if a global subscriber is
/// already installed; the existing subscriber stays in place.
pub fn init() -> Result<(), LoggingError> {
    // Env filter defaults to INFO if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(env_filter)
}

/// Initialize console logging with an explicit filter string.
///
/// The string uses `tracing_subscriber` directive syntax, e.g. `"debug"` or
/// `"truss_eventlog=trace"`. RUST_LOG is ignored.
///
/// # Errors
///
/// Returns [`LoggingError::AlreadyInitialized`] if a global subscriber is
/// already installed.
pub fn init_with_filter(directives: &str) -> Result<(), LoggingError> {
    install(EnvFilter::new(directives))
}

fn install(env_filter: EnvFilter) -> Result<(), LoggingError> {
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be set once per process, so a single
    // test exercises both the success and the already-initialized paths.
    #[test]
    fn test_second_init_reports_already_initialized() {
        assert!(init().is_ok());

        let err = init_with_filter("debug").expect_err("second init must fail");
        assert!(err
            .to_string()
            .starts_with("global tracing subscriber already set"));
        assert!(matches!(err, LoggingError::AlreadyInitialized(_)));
    }
}
