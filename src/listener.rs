//! Listener contract for container lifecycle events.
//!
//! The container delivers every [`Event`] to its registered listener through
//! this single-method interface. Listeners observe; they never influence the
//! lifecycle, and they must not retain the borrowed event.

use crate::event::Event;
use std::sync::Arc;

/// Receiver for container lifecycle events.
///
/// Implement this trait to observe the container's lifecycle. Common
/// implementations translate events into logs or metrics; the built-in
/// [`EventLogger`](crate::event_logger::EventLogger) does the former.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`). The container
/// invokes `handle` synchronously and sequentially from its lifecycle
/// driver; implementations should return quickly and must not block.
pub trait EventListener: Send + Sync {
    /// Called once per lifecycle event.
    ///
    /// The event is borrowed for the duration of the call only.
    fn handle(&self, event: &Event);
}

/// No-op listener for when lifecycle observability is disabled.
///
/// This is the default sink when no listener is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpListener;

impl EventListener for NoOpListener {
    fn handle(&self, _event: &Event) {
        // Intentionally empty
    }
}

/// Listener that forwards events to multiple listeners.
///
/// Events are delivered to every child listener, sequentially, in
/// registration order.
pub struct FanoutListener {
    listeners: Vec<Arc<dyn EventListener>>,
}

impl FanoutListener {
    /// Creates a new fanout listener with the given listeners.
    pub fn new(listeners: Vec<Arc<dyn EventListener>>) -> Self {
        Self { listeners }
    }

    /// Adds a listener to the fanout.
    pub fn add_listener(&mut self, listener: Arc<dyn EventListener>) {
        self.listeners.push(listener);
    }
}

impl EventListener for FanoutListener {
    fn handle(&self, event: &Event) {
        for listener in &self.listeners {
            listener.handle(event);
        }
    }
}

impl std::fmt::Debug for FanoutListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutListener")
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}
