// ============================================================================
// Interfaces Module
// Contains the host-facing contracts
// ============================================================================

mod event_handler;
mod keymap;

pub use event_handler::{CalcEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
pub use keymap::key_event_for_char;
