// ============================================================================
// Calculator Session
// Stateful host-facing wrapper around the pure transition function
// ============================================================================

use crate::domain::{CalculatorConfig, CalculatorState, ClearLabel, KeyEvent, Operator};
use crate::engine::transition::transition_with;
use crate::interfaces::{key_event_for_char, CalcEvent, EventHandler, NoOpEventHandler};
use std::sync::Arc;

/// A calculator session.
///
/// Owns the current state, feeds key events through the pure transition
/// function, and notifies an event handler of observable changes. The
/// session itself is single-threaded: the host serializes key events,
/// one per interaction.
pub struct Calculator {
    state: CalculatorState,
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a session with an explicit configuration and event handler.
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
            event_handler,
        }
    }

    /// Session with the default configuration and no event handler.
    pub fn with_defaults() -> Self {
        Self::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }

    /// Feed one key event through the state machine.
    ///
    /// Returns the events derived from the state change; the same events
    /// are forwarded to the session's handler.
    pub fn press(&mut self, event: KeyEvent) -> Vec<CalcEvent> {
        let previous_display = self.display();
        let was_errored = self.state.is_errored();

        let next = transition_with(&self.state, event, &self.config);

        let mut events = vec![CalcEvent::KeyPressed { event }];
        if let Some(error) = next.error {
            if !was_errored {
                events.push(CalcEvent::ErrorEntered { error });
            }
        }
        if event == KeyEvent::ClearAll {
            events.push(CalcEvent::SessionCleared);
        }
        let display = next.display_value_capped(self.config.max_significant);
        if display != previous_display {
            events.push(CalcEvent::DisplayChanged { display });
        }

        self.state = next;
        self.event_handler.on_events(events.clone());
        events
    }

    /// Feed a raw key character (keyboard input).
    ///
    /// Returns false for keys the calculator does not recognize.
    pub fn press_key(&mut self, key: char) -> bool {
        match key_event_for_char(key) {
            Some(event) => {
                self.press(event);
                true
            }
            None => false,
        }
    }

    /// Current display text.
    pub fn display(&self) -> String {
        self.state.display_value_capped(self.config.max_significant)
    }

    /// Label for the clear key.
    pub fn clear_label(&self) -> ClearLabel {
        self.state.clear_label()
    }

    /// Whether `operator` is pending, for keypad highlighting.
    pub fn operator_active(&self, operator: Operator) -> bool {
        self.state.operator_active(operator)
    }

    /// The current state value.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn press_all(calc: &mut Calculator, keys: &str) {
        for key in keys.chars() {
            calc.press_key(key);
        }
    }

    #[test]
    fn test_press_key_drives_a_full_calculation() {
        let mut calc = Calculator::with_defaults();
        press_all(&mut calc, "0.1+0.2=");
        assert_eq!(calc.display(), "0.3");
    }

    #[test]
    fn test_press_key_accepts_keypad_glyphs() {
        let mut calc = Calculator::with_defaults();
        press_all(&mut calc, "200×10%");
        assert_eq!(calc.display(), "20");
    }

    #[test]
    fn test_press_key_rejects_unknown_keys() {
        let mut calc = Calculator::with_defaults();
        assert!(!calc.press_key('q'));
        assert!(calc.press_key('7'));
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_press_reports_display_changes() {
        let mut calc = Calculator::with_defaults();
        let events = calc.press(KeyEvent::Digit(5));
        assert!(events.contains(&CalcEvent::DisplayChanged {
            display: "5".to_string()
        }));

        // A second dot is a no-op: no display change reported
        calc.press(KeyEvent::Dot);
        let events = calc.press(KeyEvent::Dot);
        assert_eq!(
            events,
            vec![CalcEvent::KeyPressed {
                event: KeyEvent::Dot
            }]
        );
    }

    #[test]
    fn test_press_reports_error_entry_once() {
        let mut calc = Calculator::with_defaults();
        press_all(&mut calc, "8/0");
        let events = calc.press(KeyEvent::Equals);
        assert!(events.contains(&CalcEvent::ErrorEntered {
            error: NumericError::DivisionByZero
        }));

        // Further events in the error state report nothing new
        let events = calc.press(KeyEvent::Digit(5));
        assert_eq!(
            events,
            vec![CalcEvent::KeyPressed {
                event: KeyEvent::Digit(5)
            }]
        );
    }

    #[test]
    fn test_press_reports_session_clear() {
        let mut calc = Calculator::with_defaults();
        press_all(&mut calc, "12");
        let events = calc.press(KeyEvent::ClearAll);
        assert!(events.contains(&CalcEvent::SessionCleared));
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_clear_label_follows_display() {
        let mut calc = Calculator::with_defaults();
        assert_eq!(calc.clear_label(), ClearLabel::AllClear);
        calc.press(KeyEvent::Digit(9));
        assert_eq!(calc.clear_label(), ClearLabel::Clear);
        calc.press(KeyEvent::ClearEntry);
        assert_eq!(calc.clear_label(), ClearLabel::AllClear);
    }

    #[test]
    fn test_operator_highlight() {
        let mut calc = Calculator::with_defaults();
        calc.press(KeyEvent::Digit(4));
        calc.press(KeyEvent::Operator(Operator::Multiply));
        assert!(calc.operator_active(Operator::Multiply));
        assert!(!calc.operator_active(Operator::Add));
        calc.press(KeyEvent::Digit(2));
        calc.press(KeyEvent::Equals);
        assert!(!calc.operator_active(Operator::Multiply));
    }

    #[test]
    fn test_custom_config_changes_display_cap() {
        let config = CalculatorConfig::new()
            .with_division_scale(6)
            .with_max_significant(6);
        let mut calc = Calculator::new(config, Arc::new(NoOpEventHandler));
        press_all(&mut calc, "2/3=");
        assert_eq!(calc.state().accumulator, "0.666667");
        assert_eq!(calc.display(), "0.66667");
    }
}
