// ============================================================================
// Calculator State
// The entire state of one calculator session
// ============================================================================

use crate::domain::Operator;
use crate::numeric::{format_for_display, NumericError, DEFAULT_MAX_SIGNIFICANT};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Literal display text of the terminal error state.
pub const ERROR_DISPLAY: &str = "Error";

/// The entire state of one calculator session.
///
/// State values are immutable from the caller's perspective: every
/// transition returns a new state, so concurrent readers of a previous
/// state never observe a partial update. The host threads one state value
/// through the transition function, one event at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorState {
    /// The literal text the user is typing. Preserves a trailing dot and
    /// trailing zeros (`"3."`, `"0.50"`) until the value is committed.
    pub current_input: String,

    /// Last committed value, as a canonical decimal string.
    pub accumulator: String,

    /// Pending binary operator, if any.
    pub operator: Option<Operator>,

    /// Operator captured for repeated-equals replay.
    pub last_operator: Option<Operator>,

    /// Operand captured for repeated-equals replay.
    pub last_operand: Option<String>,

    /// When set, the next digit starts a fresh entry instead of appending.
    pub overwrite: bool,

    /// Sticky error flag; only a full clear leaves this state.
    pub error: Option<NumericError>,
}

impl CalculatorState {
    /// The all-clear state a session starts in.
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            accumulator: "0".to_string(),
            operator: None,
            last_operator: None,
            last_operand: None,
            overwrite: false,
            error: None,
        }
    }

    /// The terminal error state: every field reverts to its default except
    /// the error flag.
    pub fn errored(error: NumericError) -> Self {
        Self {
            error: Some(error),
            ..Self::new()
        }
    }

    /// Check if the session is in the terminal error state.
    pub fn is_errored(&self) -> bool {
        self.error.is_some()
    }

    /// Value to show on the display, capped at the default significant
    /// digits.
    pub fn display_value(&self) -> String {
        self.display_value_capped(DEFAULT_MAX_SIGNIFICANT)
    }

    /// Value to show on the display.
    ///
    /// An errored session always shows the error text. A committed or
    /// computed value (overwrite mode) is formatted through the display
    /// cap; a live entry is returned verbatim, trailing dot and all.
    pub fn display_value_capped(&self, max_significant: usize) -> String {
        if self.error.is_some() {
            return ERROR_DISPLAY.to_string();
        }
        if self.overwrite {
            return format_for_display(&self.accumulator, max_significant);
        }
        self.current_input.clone()
    }

    /// Label the host should render on the clear key: "C" while there is
    /// something to clear, "AC" otherwise.
    pub fn clear_label(&self) -> ClearLabel {
        let showing = self.display_value();
        if showing != "0" && showing != ERROR_DISPLAY {
            ClearLabel::Clear
        } else {
            ClearLabel::AllClear
        }
    }

    /// Check whether `operator` is the pending operator, for keypad
    /// highlighting.
    pub fn operator_active(&self, operator: Operator) -> bool {
        self.operator == Some(operator)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for the clear key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClearLabel {
    /// Nothing to clear; the key resets the whole session
    AllClear,
    /// A live entry or result is showing; the key clears the entry
    Clear,
}

impl ClearLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearLabel::AllClear => "AC",
            ClearLabel::Clear => "C",
        }
    }
}

impl fmt::Display for ClearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
