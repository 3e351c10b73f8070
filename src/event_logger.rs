//! Translates container lifecycle events into structured log records.
//!
//! [`EventLogger`] is the bridge between the container's event stream and a
//! [`Logger`] backend. It holds exactly one relationship, fixed at
//! construction, and carries no other state. Every [`Event`] maps to at most
//! one log call: a DEBUG record on the success path, a single ERROR record
//! carrying the failure description when the event reports one.
//!
//! All record messages share the `[Truss] ` prefix so container lifecycle
//! lines are greppable in mixed output.

use crate::event::Event;
use crate::listener::EventListener;
use crate::log::{Field, Logger};
use std::sync::Arc;

/// Listener that logs every lifecycle event through a [`Logger`].
///
/// Dispatch is synchronous and unbuffered: the log call happens inside
/// [`handle`](EventListener::handle), in event order, before the call
/// returns. A handful of bookkeeping events are silent on success and only
/// produce a record when they carry a failure.
pub struct EventLogger {
    logger: Arc<dyn Logger>,
}

impl EventLogger {
    /// Creates an event logger writing through the given backend.
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl std::fmt::Debug for EventLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLogger").finish()
    }
}

impl EventListener for EventLogger {
    fn handle(&self, event: &Event) {
        match event {
            Event::BeforeRun {
                kind,
                module_name,
                name,
            } => {
                self.logger.debug(
                    "[Truss] before run",
                    &[
                        Field::str("kind", kind.clone()),
                        Field::str("module_name", module_name.clone()),
                        Field::str("name", name.clone()),
                    ],
                );
            }
            Event::Decorated { error } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] decorate", &[Field::error(err.as_ref())]);
                }
            }
            Event::Invoked { error } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] invoked", &[Field::error(err.as_ref())]);
                }
            }
            Event::Invoking {
                function_name,
                module_name,
            } => {
                self.logger.debug(
                    "[Truss] invoking",
                    &[
                        Field::str("function_name", function_name.clone()),
                        Field::str("module_name", module_name.clone()),
                    ],
                );
            }
            Event::LoggerInitialized {
                constructor_name,
                error,
            } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] logger initialized", &[Field::error(err.as_ref())]);
                    return;
                }
                self.logger.debug(
                    "[Truss] logger initialized",
                    &[Field::str("constructor_name", constructor_name.clone())],
                );
            }
            Event::OnStartExecuted {
                caller_name,
                function_name,
                method,
                runtime,
                error,
            } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] on start executed", &[Field::error(err.as_ref())]);
                    return;
                }
                self.logger.debug(
                    "[Truss] on start executed",
                    &[
                        Field::str("caller_name", caller_name.clone()),
                        Field::str("function_name", function_name.clone()),
                        Field::str("method", method.clone()),
                        Field::int("runtime", runtime.as_nanos() as i64),
                    ],
                );
            }
            Event::OnStartExecuting {
                caller_name,
                function_name,
            } => {
                self.logger.debug(
                    "[Truss] on start executing",
                    &[
                        Field::str("caller_name", caller_name.clone()),
                        Field::str("function_name", function_name.clone()),
                    ],
                );
            }
            Event::OnStopExecuted {
                caller_name,
                function_name,
                error,
            } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] on stop executed", &[Field::error(err.as_ref())]);
                    return;
                }
                self.logger.debug(
                    "[Truss] on stop executed",
                    &[
                        Field::str("caller_name", caller_name.clone()),
                        Field::str("function_name", function_name.clone()),
                    ],
                );
            }
            Event::OnStopExecuting {
                caller_name,
                function_name,
            } => {
                self.logger.debug(
                    "[Truss] on stop executing",
                    &[
                        Field::str("caller_name", caller_name.clone()),
                        Field::str("function_name", function_name.clone()),
                    ],
                );
            }
            Event::Provided {
                constructor_name,
                module_name,
                private,
                error,
            } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] provided", &[Field::error(err.as_ref())]);
                    return;
                }
                self.logger.debug(
                    "[Truss] provided",
                    &[
                        Field::str("constructor_name", constructor_name.clone()),
                        Field::str("module_name", module_name.clone()),
                        Field::bool("private", *private),
                    ],
                );
            }
            Event::Replaced {
                module_name,
                module_trace,
                output_type_names,
                stack_trace,
                error,
            } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] replaced", &[Field::error(err.as_ref())]);
                    return;
                }
                self.logger.debug(
                    "[Truss] replaced",
                    &[
                        Field::str("module_name", module_name.clone()),
                        Field::strings("module_trace", module_trace.clone()),
                        Field::strings("output_type_names", output_type_names.clone()),
                        Field::strings("stacktrace", stack_trace.clone()),
                    ],
                );
            }
            Event::RolledBack { error } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] rolled back", &[Field::error(err.as_ref())]);
                }
            }
            Event::RollingBack { start_error } => {
                if let Some(err) = start_error {
                    self.logger
                        .error("[Truss] rolling back", &[Field::error(err.as_ref())]);
                }
            }
            Event::Run {
                kind,
                module_name,
                name,
                error,
            } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] run", &[Field::error(err.as_ref())]);
                    return;
                }
                self.logger.debug(
                    "[Truss] run",
                    &[
                        Field::str("kind", kind.clone()),
                        Field::str("module_name", module_name.clone()),
                        Field::str("name", name.clone()),
                    ],
                );
            }
            Event::Started { error } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] started", &[Field::error(err.as_ref())]);
                }
            }
            Event::Stopped { error } => {
                if let Some(err) = error {
                    self.logger
                        .error("[Truss] stopped", &[Field::error(err.as_ref())]);
                }
            }
            Event::Stopping { signal } => {
                self.logger.debug(
                    "[Truss] stopping",
                    &[Field::str("signal", signal.to_string())],
                );
            }
            Event::Supplied {
                module_name,
                type_name,
                module_trace,
                stack_trace,
                error,
            } => {
                // Inverted polarity: this event produces a record only when
                // a failure is attached, and the record carries the non-error
                // fields rather than the failure itself.
                if error.is_some() {
                    self.logger.debug(
                        "[Truss] supplied",
                        &[
                            Field::str("module_name", module_name.clone()),
                            Field::str("type_name", type_name.clone()),
                            Field::strings("module_trace", module_trace.clone()),
                            Field::strings("stacktrace", stack_trace.clone()),
                        ],
                    );
                }
            }
        }
    }
}
