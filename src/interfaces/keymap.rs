// ============================================================================
// Keyboard Mapping
// Maps raw key characters from the host to calculator key events
// ============================================================================

use crate::domain::{KeyEvent, Operator};

/// Translate a key character into a calculator event.
///
/// Digits, the decimal separator, and the operator characters (including
/// the keypad glyphs `×`/`÷` and the `x`/`X` aliases) map directly.
/// Control characters follow terminal conventions: Enter or `=` for
/// equals, backspace/delete for delete-last, escape for all-clear.
/// Returns `None` for keys the calculator does not recognize.
pub fn key_event_for_char(key: char) -> Option<KeyEvent> {
    match key {
        '0'..='9' => Some(KeyEvent::Digit(key as u8 - b'0')),
        '.' => Some(KeyEvent::Dot),
        '%' => Some(KeyEvent::Percent),
        '=' | '\r' | '\n' => Some(KeyEvent::Equals),
        '\u{8}' | '\u{7f}' => Some(KeyEvent::DeleteLast),
        '\u{1b}' => Some(KeyEvent::ClearAll),
        _ => Operator::from_key_char(key).map(KeyEvent::Operator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        assert_eq!(key_event_for_char('0'), Some(KeyEvent::Digit(0)));
        assert_eq!(key_event_for_char('9'), Some(KeyEvent::Digit(9)));
    }

    #[test]
    fn test_operator_keys_and_glyphs() {
        assert_eq!(
            key_event_for_char('+'),
            Some(KeyEvent::Operator(Operator::Add))
        );
        assert_eq!(
            key_event_for_char('×'),
            Some(KeyEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            key_event_for_char('÷'),
            Some(KeyEvent::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(key_event_for_char('\r'), Some(KeyEvent::Equals));
        assert_eq!(key_event_for_char('='), Some(KeyEvent::Equals));
        assert_eq!(key_event_for_char('\u{8}'), Some(KeyEvent::DeleteLast));
        assert_eq!(key_event_for_char('\u{1b}'), Some(KeyEvent::ClearAll));
    }

    #[test]
    fn test_unrecognized_keys() {
        assert_eq!(key_event_for_char('q'), None);
        assert_eq!(key_event_for_char(' '), None);
    }
}
