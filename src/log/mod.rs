//! Logging abstraction layer.
//!
//! This module provides the structured logging interface the event adapter
//! writes to, decoupled from any specific logging implementation. A record
//! is a [`LogLevel`], a message, and an ordered list of typed [`Field`]s.
//!
//! # Architecture
//!
//! - [`Logger`] trait: The interface records are written through
//! - [`Field`] / [`FieldValue`]: Typed named values attached to a record
//! - [`TracingLogger`]: Production adapter that delegates to the `tracing` crate
//! - [`NoOpLogger`]: Silent logger for testing and benchmarking
//!
//! # Usage
//!
//! Components that need logging accept an `Arc<dyn Logger>`:
//!
//! ```
//! use truss_eventlog::log::{Field, Logger, NoOpLogger};
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn new(logger: Arc<dyn Logger>) -> Self {
//!         Self { logger }
//!     }
//!
//!     fn do_work(&self) {
//!         self.logger.debug("work completed", &[Field::int("items", 3)]);
//!     }
//! }
//!
//! let component = MyComponent::new(Arc::new(NoOpLogger));
//! component.do_work();
//! ```

mod field;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use field::{Field, FieldValue};
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
