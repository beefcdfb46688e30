// ============================================================================
// Pocket Calculator Library
// Exact-decimal arithmetic engine and key-event state machine
// ============================================================================

//! # pocketcalc
//!
//! A pocket-calculator emulator core: exact decimal arithmetic with no
//! binary floating-point error, driven by a pure key-event state machine.
//!
//! ## Features
//!
//! - **Arbitrary-precision decimals** stored as (unscaled integer, scale)
//!   pairs; `0.1 + 0.2` is exactly `0.3`
//! - **Pure transition function**: one key event in, next state out, no
//!   hidden shared state
//! - **Four-function input quirks** reproduced faithfully: repeated
//!   equals, percent-of-operand, operator override, sign on empty entry
//! - **Host-agnostic**: the core produces a display string, a clear-key
//!   label, and an operator-active flag; rendering and key capture stay
//!   with the caller
//!
//! ## Example
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut calc = Calculator::with_defaults();
//! for key in "0.1+0.2=".chars() {
//!     calc.press_key(key);
//! }
//! assert_eq!(calc.display(), "0.3");
//!
//! // Or drive the pure transition function directly
//! let state = CalculatorState::new();
//! let state = transition(&state, KeyEvent::Digit(2));
//! let state = transition(&state, KeyEvent::Operator(Operator::Add));
//! let state = transition(&state, KeyEvent::Digit(3));
//! let state = transition(&state, KeyEvent::Equals);
//! assert_eq!(state.display_value(), "5");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, CalculatorState, ClearLabel, KeyEvent, Operator};
    pub use crate::engine::{
        clear_all, clear_entry, delete_last, equals, input_digit, input_dot, percent,
        set_operator, toggle_sign, transition, transition_with, Calculator,
    };
    pub use crate::interfaces::{
        key_event_for_char, CalcEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{format_for_display, Decimal, NumericError, NumericResult};
}
