//! No-operation logger implementation.

use crate::log::{Field, LogLevel, Logger};

/// A logger that discards all records.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use truss_eventlog::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.debug("this record is discarded", &[]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _message: &str, _fields: &[Field]) {
        // Intentionally empty - discard all records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpLogger>();
    }

    #[test]
    fn test_noop_logger_as_trait_object() {
        let logger: Box<dyn Logger> = Box::new(NoOpLogger);
        logger.debug("debug message", &[Field::str("key", "value")]);
        logger.error("error message", &[]);
        logger.log(LogLevel::Warn, "warn message", &[]);
    }

    #[test]
    fn test_noop_logger_debug_impl() {
        let logger = NoOpLogger;
        assert_eq!(format!("{:?}", logger), "NoOpLogger");
    }
}
