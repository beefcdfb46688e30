// ============================================================================
// Calculator Transition Function
// Pure reducer: one key event in, next state out
// ============================================================================

use crate::domain::{CalculatorConfig, CalculatorState, KeyEvent, Operator};
use crate::numeric::{self, NumericResult};

/// Apply one key event to a state, producing the next state.
///
/// Uses the default configuration. The input state is never mutated; the
/// host threads the returned value into the next call.
pub fn transition(state: &CalculatorState, event: KeyEvent) -> CalculatorState {
    transition_with(state, event, &CalculatorConfig::default())
}

/// Apply one key event under an explicit configuration.
pub fn transition_with(
    state: &CalculatorState,
    event: KeyEvent,
    config: &CalculatorConfig,
) -> CalculatorState {
    match event {
        KeyEvent::Digit(digit) => input_digit(state, digit),
        KeyEvent::Dot => input_dot(state),
        KeyEvent::Operator(operator) => set_operator_with(state, operator, config),
        KeyEvent::ToggleSign => toggle_sign(state),
        KeyEvent::Percent => percent_with(state, config),
        KeyEvent::Equals => equals_with(state, config),
        KeyEvent::ClearEntry => clear_entry(state),
        KeyEvent::ClearAll => clear_all(),
        KeyEvent::DeleteLast => delete_last(state),
    }
}

/// Evaluate `a operator b` through the arithmetic library.
fn apply_operator(
    a: &str,
    b: &str,
    operator: Operator,
    division_scale: usize,
) -> NumericResult<String> {
    match operator {
        Operator::Add => numeric::add(a, b),
        Operator::Subtract => numeric::sub(a, b),
        Operator::Multiply => numeric::mul(a, b),
        Operator::Divide => numeric::div(a, b, division_scale),
    }
}

/// A digit key.
///
/// In overwrite mode the digit starts a fresh entry; otherwise it appends,
/// except that a lone `"0"` is replaced so the entry never grows a leading
/// zero.
pub fn input_digit(state: &CalculatorState, digit: u8) -> CalculatorState {
    if state.is_errored() || digit > 9 {
        return state.clone();
    }
    let mut next = state.clone();
    let d = char::from(b'0' + digit);
    if next.overwrite {
        next.current_input = d.to_string();
        next.overwrite = false;
        return next;
    }
    if next.current_input == "0" {
        next.current_input = d.to_string();
    } else {
        next.current_input.push(d);
    }
    next
}

/// The decimal separator key. A second dot on an already-dotted entry is a
/// no-op.
pub fn input_dot(state: &CalculatorState) -> CalculatorState {
    if state.is_errored() {
        return state.clone();
    }
    let mut next = state.clone();
    if next.overwrite {
        next.current_input = "0.".to_string();
        next.overwrite = false;
        return next;
    }
    if !next.current_input.contains('.') {
        next.current_input.push('.');
    }
    next
}

/// An operator key, with the default division scale.
pub fn set_operator(state: &CalculatorState, operator: Operator) -> CalculatorState {
    set_operator_with(state, operator, &CalculatorConfig::default())
}

fn set_operator_with(
    state: &CalculatorState,
    operator: Operator,
    config: &CalculatorConfig,
) -> CalculatorState {
    if state.is_errored() {
        return state.clone();
    }
    let mut next = state.clone();
    match (next.operator, next.overwrite) {
        // Operator switched before the second operand was typed
        (Some(_), true) => {
            next.operator = Some(operator);
            next
        }
        // A full pair is pending: fold it into the accumulator first
        (Some(pending), false) => {
            let operand = next.current_input.clone();
            match apply_operator(&next.accumulator, &operand, pending, config.division_scale) {
                Ok(result) => {
                    next.accumulator = result.clone();
                    next.current_input = result;
                    next.overwrite = true;
                    next.last_operator = Some(pending);
                    next.last_operand = Some(operand);
                    next.operator = Some(operator);
                    next
                }
                Err(error) => CalculatorState::errored(error),
            }
        }
        // No pending operator: commit the visible value and arm the new one
        (None, _) => {
            let value = if next.overwrite {
                next.accumulator.clone()
            } else {
                next.current_input.clone()
            };
            match numeric::normalize(&value) {
                Ok(normalized) => {
                    next.accumulator = normalized;
                    next.operator = Some(operator);
                    next.overwrite = true;
                    next
                }
                Err(error) => CalculatorState::errored(error),
            }
        }
    }
}

/// The sign-toggle key. Flips whichever value is live; an empty entry
/// (`"0"` or `"0."`) stays unsigned.
pub fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    if state.is_errored() {
        return state.clone();
    }
    let mut next = state.clone();
    if next.overwrite {
        next.accumulator = flip_sign(&next.accumulator);
    } else {
        next.current_input = flip_sign(&next.current_input);
    }
    next
}

fn flip_sign(value: &str) -> String {
    if let Some(stripped) = value.strip_prefix('-') {
        return stripped.to_string();
    }
    if value == "0" || value == "0." {
        return value.to_string();
    }
    format!("-{}", value)
}

/// The percent key, with the default division scale.
pub fn percent(state: &CalculatorState) -> CalculatorState {
    percent_with(state, &CalculatorConfig::default())
}

fn percent_with(state: &CalculatorState, config: &CalculatorConfig) -> CalculatorState {
    if state.is_errored() {
        return state.clone();
    }
    let scale = config.division_scale;
    let mut next = state.clone();

    if let Some(pending) = next.operator {
        // The percent operand depends on the pending operator: for + and -
        // it is a percentage of the accumulator (200 + 10% adds 20); for
        // × and ÷ it is the plain fraction (200 × 10% is 20). The
        // operation then resolves immediately.
        let a = next.accumulator.clone();
        let b_in = if next.overwrite {
            "0".to_string()
        } else {
            next.current_input.clone()
        };
        let b_pct = match pending {
            Operator::Add | Operator::Subtract => {
                numeric::mul(&a, &b_in).and_then(|product| numeric::div(&product, "100", scale))
            }
            Operator::Multiply | Operator::Divide => numeric::div(&b_in, "100", scale),
        };
        let b_pct = match b_pct {
            Ok(value) => value,
            Err(error) => return CalculatorState::errored(error),
        };
        return match apply_operator(&a, &b_pct, pending, scale) {
            Ok(result) => {
                next.accumulator = result;
                next.current_input = b_pct.clone();
                next.last_operator = Some(pending);
                next.last_operand = Some(b_pct);
                next.operator = None;
                next.overwrite = true;
                next
            }
            Err(error) => CalculatorState::errored(error),
        };
    }

    // No operator pending: divide the live value by 100 in place
    if next.overwrite {
        match numeric::div(&next.accumulator, "100", scale) {
            Ok(value) => {
                next.accumulator = value;
                next
            }
            Err(error) => CalculatorState::errored(error),
        }
    } else {
        match numeric::div(&next.current_input, "100", scale) {
            Ok(value) => {
                next.current_input = value;
                next
            }
            Err(error) => CalculatorState::errored(error),
        }
    }
}

/// The equals key, with the default division scale.
pub fn equals(state: &CalculatorState) -> CalculatorState {
    equals_with(state, &CalculatorConfig::default())
}

fn equals_with(state: &CalculatorState, config: &CalculatorConfig) -> CalculatorState {
    if state.is_errored() {
        return state.clone();
    }
    let mut next = state.clone();

    if let Some(pending) = next.operator {
        // In overwrite mode nothing new was typed; replay the captured
        // operand, falling back to the accumulator itself (`2 + =` is 4).
        let operand = if next.overwrite {
            next.last_operand
                .clone()
                .unwrap_or_else(|| next.accumulator.clone())
        } else {
            next.current_input.clone()
        };
        return match apply_operator(&next.accumulator, &operand, pending, config.division_scale) {
            Ok(result) => {
                next.accumulator = result;
                next.last_operator = Some(pending);
                next.last_operand = Some(operand);
                next.operator = None;
                next.overwrite = true;
                next
            }
            Err(error) => CalculatorState::errored(error),
        };
    }

    // Repeated equals: re-apply the last operation against the result
    if let (Some(last_op), Some(operand)) = (next.last_operator, next.last_operand.clone()) {
        return match apply_operator(&next.accumulator, &operand, last_op, config.division_scale) {
            Ok(result) => {
                next.accumulator = result;
                next.overwrite = true;
                next
            }
            Err(error) => CalculatorState::errored(error),
        };
    }

    next
}

/// The clear-entry key. Resets only the live entry; the accumulator and
/// pending operator survive. On an errored session this is a full reset.
pub fn clear_entry(state: &CalculatorState) -> CalculatorState {
    if state.is_errored() {
        return CalculatorState::new();
    }
    let mut next = state.clone();
    next.current_input = "0".to_string();
    next.overwrite = false;
    next
}

/// The all-clear key.
pub fn clear_all() -> CalculatorState {
    CalculatorState::new()
}

/// The delete key.
///
/// In overwrite mode there is nothing typed to delete; the display just
/// returns to an editable empty entry. A one-character entry, or a
/// leftover `"-"`/`"-0"`, collapses to `"0"`.
pub fn delete_last(state: &CalculatorState) -> CalculatorState {
    if state.is_errored() {
        return state.clone();
    }
    let mut next = state.clone();
    if next.overwrite {
        next.current_input = "0".to_string();
        next.overwrite = false;
        return next;
    }
    if next.current_input.len() <= 1 {
        next.current_input = "0".to_string();
        return next;
    }
    next.current_input.pop();
    if next.current_input == "-" || next.current_input == "-0" {
        next.current_input = "0".to_string();
    }
    next
}

// ============================================================================
// Tests
// ============================================================================
