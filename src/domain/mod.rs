// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod event;
pub mod state;

pub use config::CalculatorConfig;
pub use event::{KeyEvent, Operator};
pub use state::{CalculatorState, ClearLabel, ERROR_DISPLAY};
