//! # Keyboard Mapping
//!
//! Toolkit-neutral key events and the standard bindings shared by every
//! adapter. GUI and terminal front ends translate their native key types
//! into [`Key`] and call [`action_for_key`].
//!
//! | Key                | Action          |
//! |--------------------|-----------------|
//! | `0`-`9`, `.`       | digit entry     |
//! | `+` `-` `*` `/`    | operator        |
//! | `Enter`, `=`       | evaluate        |
//! | `Escape`           | clear           |
//! | `Backspace`        | backspace       |

use crate::action::Action;
use crate::operation::Operation;

/// A key press, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
}

/// Look up the action bound to a key, if any.
///
/// # Example
///
/// ```rust
/// use calc_core::action::Action;
/// use calc_core::keymap::{action_for_key, Key};
///
/// assert_eq!(action_for_key(Key::Enter), Some(Action::Evaluate));
/// assert_eq!(action_for_key(Key::Char('q')), None);
/// ```
pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Char(symbol @ ('0'..='9' | '.')) => Some(Action::Digit(symbol)),
        Key::Char('+') => Some(Action::Operation(Operation::Add)),
        Key::Char('-') => Some(Action::Operation(Operation::Subtract)),
        Key::Char('*') => Some(Action::Operation(Operation::Multiply)),
        Key::Char('/') => Some(Action::Operation(Operation::Divide)),
        Key::Char('=') | Key::Enter => Some(Action::Evaluate),
        Key::Escape => Some(Action::Clear),
        Key::Backspace => Some(Action::Backspace),
        Key::Char(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_decimal_point() {
        for symbol in "0123456789.".chars() {
            assert_eq!(action_for_key(Key::Char(symbol)), Some(Action::Digit(symbol)));
        }
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(action_for_key(Key::Char('+')), Some(Action::Operation(Operation::Add)));
        assert_eq!(action_for_key(Key::Char('-')), Some(Action::Operation(Operation::Subtract)));
        assert_eq!(action_for_key(Key::Char('*')), Some(Action::Operation(Operation::Multiply)));
        assert_eq!(action_for_key(Key::Char('/')), Some(Action::Operation(Operation::Divide)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key(Key::Char('=')), Some(Action::Evaluate));
        assert_eq!(action_for_key(Key::Enter), Some(Action::Evaluate));
        assert_eq!(action_for_key(Key::Escape), Some(Action::Clear));
        assert_eq!(action_for_key(Key::Backspace), Some(Action::Backspace));
    }

    #[test]
    fn test_unbound_keys() {
        for symbol in ['%', 'a', ' ', 'x'] {
            assert_eq!(action_for_key(Key::Char(symbol)), None);
        }
    }
}
