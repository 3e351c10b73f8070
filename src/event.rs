//! Lifecycle events emitted by the Truss container.
//!
//! This module defines the closed event vocabulary for container
//! observability. The container emits exactly one event per lifecycle step
//! (provide, supply, decorate, replace, invoke, hook execution, start, stop,
//! rollback) and delivers it to every registered
//! [`EventListener`](crate::listener::EventListener) by reference. Events are
//! immutable values; listeners must not retain them beyond the call.
//!
//! # Failure payloads
//!
//! Variants describing a fallible step carry an `Option<EventError>`. The
//! error value is shared (`Arc`) so events stay cheap to clone while the
//! container remains the owner of the underlying failure.

use crate::signal::Signal;
use std::sync::Arc;
use std::time::Duration;

/// Failure payload attached to a lifecycle event.
///
/// Shared so that events remain `Clone`; the container constructs it once
/// and every observer sees the same underlying error value.
pub type EventError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Events emitted by the container during application lifecycle.
///
/// Each variant represents one discrete step. Payloads carry the names the
/// container resolved at that step (constructors, modules, callers) plus an
/// optional failure where the step can fail.
#[derive(Clone, Debug)]
pub enum Event {
    // =========================================================================
    // Dependency Graph Events
    // =========================================================================
    /// A constructor was registered with the container.
    Provided {
        /// Name of the registered constructor function.
        constructor_name: String,
        /// Module the constructor was registered in.
        module_name: String,
        /// True if the constructed value is private to its module.
        private: bool,
        error: Option<EventError>,
    },

    /// A pre-built value was supplied directly to the graph.
    Supplied {
        module_name: String,
        /// Type of the supplied value.
        type_name: String,
        /// Module nesting path that led to the supply call.
        module_trace: Vec<String>,
        /// Call stack captured at the supply site.
        stack_trace: Vec<String>,
        error: Option<EventError>,
    },

    /// A decorator was applied to an existing value in the graph.
    Decorated { error: Option<EventError> },

    /// A value in the graph was replaced by another.
    Replaced {
        module_name: String,
        /// Module nesting path that led to the replace call.
        module_trace: Vec<String>,
        /// Types produced by the replacement.
        output_type_names: Vec<String>,
        /// Call stack captured at the replace site.
        stack_trace: Vec<String>,
        error: Option<EventError>,
    },

    // =========================================================================
    // Constructor / Function Execution Events
    // =========================================================================
    /// A registered function is about to be executed.
    BeforeRun {
        /// What is being run ("constructor", "decorator", ...).
        kind: String,
        module_name: String,
        /// Name of the function being run.
        name: String,
    },

    /// A registered function finished executing.
    Run {
        /// What was run ("constructor", "decorator", ...).
        kind: String,
        module_name: String,
        name: String,
        error: Option<EventError>,
    },

    /// An invoked function is about to be called.
    Invoking {
        function_name: String,
        module_name: String,
    },

    /// An invoked function returned.
    Invoked { error: Option<EventError> },

    // =========================================================================
    // Hook Execution Events
    // =========================================================================
    /// A start hook is about to execute.
    OnStartExecuting {
        /// Component that registered the hook.
        caller_name: String,
        function_name: String,
    },

    /// A start hook finished executing.
    OnStartExecuted {
        caller_name: String,
        function_name: String,
        /// Hook registration method ("OnStart", ...).
        method: String,
        /// Wall-clock time the hook ran for.
        runtime: Duration,
        error: Option<EventError>,
    },

    /// A stop hook is about to execute.
    OnStopExecuting {
        caller_name: String,
        function_name: String,
    },

    /// A stop hook finished executing.
    OnStopExecuted {
        caller_name: String,
        function_name: String,
        error: Option<EventError>,
    },

    // =========================================================================
    // Application Lifecycle Events
    // =========================================================================
    /// Startup completed (successfully or not).
    Started { error: Option<EventError> },

    /// Startup failed and the already-executed start hooks are being rolled
    /// back.
    RollingBack {
        /// The startup failure that triggered the rollback.
        start_error: Option<EventError>,
    },

    /// Rollback of start hooks completed.
    RolledBack { error: Option<EventError> },

    /// Shutdown was requested by an OS signal.
    Stopping {
        /// The signal that initiated shutdown.
        signal: Signal,
    },

    /// Shutdown completed (successfully or not).
    Stopped { error: Option<EventError> },

    // =========================================================================
    // Logger Setup Events
    // =========================================================================
    /// The container finished constructing its own logger.
    LoggerInitialized {
        constructor_name: String,
        error: Option<EventError>,
    },
}

impl Event {
    /// Returns a short name for this event type (useful for debugging).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Provided { .. } => "provided",
            Self::Supplied { .. } => "supplied",
            Self::Decorated { .. } => "decorated",
            Self::Replaced { .. } => "replaced",
            Self::BeforeRun { .. } => "before_run",
            Self::Run { .. } => "run",
            Self::Invoking { .. } => "invoking",
            Self::Invoked { .. } => "invoked",
            Self::OnStartExecuting { .. } => "on_start_executing",
            Self::OnStartExecuted { .. } => "on_start_executed",
            Self::OnStopExecuting { .. } => "on_stop_executing",
            Self::OnStopExecuted { .. } => "on_stop_executed",
            Self::Started { .. } => "started",
            Self::RollingBack { .. } => "rolling_back",
            Self::RolledBack { .. } => "rolled_back",
            Self::Stopping { .. } => "stopping",
            Self::Stopped { .. } => "stopped",
            Self::LoggerInitialized { .. } => "logger_initialized",
        }
    }

    /// Returns the failure attached to this event, if any.
    ///
    /// Variants without a failure field (`BeforeRun`, `Invoking`,
    /// `OnStartExecuting`, `OnStopExecuting`, `Stopping`) always return
    /// `None`.
    pub fn failure(&self) -> Option<&EventError> {
        match self {
            Self::Provided { error, .. }
            | Self::Supplied { error, .. }
            | Self::Decorated { error }
            | Self::Replaced { error, .. }
            | Self::Run { error, .. }
            | Self::Invoked { error }
            | Self::OnStartExecuted { error, .. }
            | Self::OnStopExecuted { error, .. }
            | Self::Started { error }
            | Self::RollingBack { start_error: error }
            | Self::RolledBack { error }
            | Self::Stopped { error }
            | Self::LoggerInitialized { error, .. } => error.as_ref(),
            Self::BeforeRun { .. }
            | Self::Invoking { .. }
            | Self::OnStartExecuting { .. }
            | Self::OnStopExecuting { .. }
            | Self::Stopping { .. } => None,
        }
    }
}
