//! Shutdown signal representation.

use std::fmt;

/// OS signal that initiated container shutdown.
///
/// Carried by [`Event::Stopping`](crate::event::Event::Stopping) so observers can
/// report why the application is going down. The `Display` form is the
/// conventional lowercase signal name (`interrupt`, `terminated`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Interactive interrupt (Ctrl-C / SIGINT).
    Interrupt,
    /// Termination request (SIGTERM).
    Terminated,
    /// Quit request (SIGQUIT).
    Quit,
    /// Hangup (SIGHUP).
    Hangup,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => write!(f, "interrupt"),
            Self::Terminated => write!(f, "terminated"),
            Self::Quit => write!(f, "quit"),
            Self::Hangup => write!(f, "hangup"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_display_names() {
        assert_eq!(Signal::Interrupt.to_string(), "interrupt");
        assert_eq!(Signal::Terminated.to_string(), "terminated");
        assert_eq!(Signal::Quit.to_string(), "quit");
        assert_eq!(Signal::Hangup.to_string(), "hangup");
    }

    #[test]
    fn test_signal_equality() {
        assert_eq!(Signal::Interrupt, Signal::Interrupt);
        assert_ne!(Signal::Interrupt, Signal::Terminated);
    }

    #[test]
    fn test_signal_debug() {
        assert_eq!(format!("{:?}", Signal::Interrupt), "Interrupt");
    }
}
