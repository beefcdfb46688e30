// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator session changes
// ============================================================================

use crate::domain::KeyEvent;
use crate::numeric::NumericError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a calculator session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcEvent {
    /// A key event was fed to the state machine
    KeyPressed { event: KeyEvent },

    /// The display text changed
    DisplayChanged { display: String },

    /// The session entered the terminal error state
    ErrorEntered { error: NumericError },

    /// The session was reset to the all-clear state
    SessionCleared,
}

/// Event handler trait for observing calculator sessions
/// Implementations can handle rendering, logging, metrics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a session event
    fn on_event(&self, event: CalcEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalcEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalcEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalcEvent) {
        tracing::debug!("Calculator session event: {:?}", event);
    }
}
