//! Truss EventLog - structured lifecycle logging for the Truss application container
//!
//! This library translates the container's lifecycle events (provide, invoke,
//! decorate, supply, hook execution, start, stop, rollback) into structured
//! log records written through a pluggable [`log::Logger`] backend.
//!
//! # Quick Start
//!
//! Register an [`event_logger::EventLogger`] as the container's event
//! listener:
//!
//! ```
//! use std::sync::Arc;
//! use truss_eventlog::event::Event;
//! use truss_eventlog::event_logger::EventLogger;
//! use truss_eventlog::listener::EventListener;
//! use truss_eventlog::log::TracingLogger;
//!
//! let listener = EventLogger::new(Arc::new(TracingLogger::new()));
//!
//! // The container delivers events; each becomes at most one log record.
//! listener.handle(&Event::Provided {
//!     constructor_name: "new_pool".to_string(),
//!     module_name: "database".to_string(),
//!     private: false,
//!     error: None,
//! });
//! ```

pub mod event;
pub mod event_logger;
pub mod listener;
pub mod log;
pub mod logging;
pub mod signal;

/// Version of the Truss EventLog library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_public_modules_wire_together() {
        use crate::event::Event;
        use crate::event_logger::EventLogger;
        use crate::listener::EventListener;
        use crate::log::NoOpLogger;
        use std::sync::Arc;

        let listener = EventLogger::new(Arc::new(NoOpLogger));
        listener.handle(&Event::Started { error: None });
    }
}
