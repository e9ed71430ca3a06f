//! Keypad
//!
//! ```text
//! MC  MR  M+  M−
//! C   ⌫   %   ÷
//! 7   8   9   ×
//! 4   5   6   −
//! 1   2   3   +
//! 0 (wide) .  =
//! ```
//!
//! While the display shows "Error" only the clear key is active.

use iced::widget::{button, column, container, row, text, Column, Row};
use iced::{Element, Length, Padding};

use calc_core::{Action, Operation};

use crate::Message;

/// Every row but the last, which holds the double-width zero key.
const KEY_ROWS: [[Action; 4]; 5] = [
    [
        Action::MemoryClear,
        Action::MemoryRecall,
        Action::MemoryAdd,
        Action::MemorySubtract,
    ],
    [
        Action::Clear,
        Action::Backspace,
        Action::Operation(Operation::Percentage),
        Action::Operation(Operation::Divide),
    ],
    [
        Action::Digit('7'),
        Action::Digit('8'),
        Action::Digit('9'),
        Action::Operation(Operation::Multiply),
    ],
    [
        Action::Digit('4'),
        Action::Digit('5'),
        Action::Digit('6'),
        Action::Operation(Operation::Subtract),
    ],
    [
        Action::Digit('1'),
        Action::Digit('2'),
        Action::Digit('3'),
        Action::Operation(Operation::Add),
    ],
];

const SPACING: f32 = 6.0;

/// Render the keypad
pub fn view_keypad(error_shown: bool) -> Element<'static, Message> {
    let mut keypad: Column<'static, Message> = column![].spacing(SPACING);

    for keys in KEY_ROWS {
        let mut keys_row: Row<'static, Message> = row![].spacing(SPACING);
        for action in keys {
            keys_row = keys_row.push(key_button(action, 1, error_shown));
        }
        keypad = keypad.push(keys_row);
    }

    keypad = keypad.push(
        row![
            key_button(Action::Digit('0'), 2, error_shown),
            key_button(Action::Digit('.'), 1, error_shown),
            key_button(Action::Evaluate, 1, error_shown),
        ]
        .spacing(SPACING),
    );

    keypad.into()
}

/// A keypad button spanning `span` columns.
fn key_button(action: Action, span: u16, error_shown: bool) -> Element<'static, Message> {
    let style = match action {
        Action::Clear | Action::Backspace => button::danger,
        Action::Operation(_) | Action::Evaluate => button::primary,
        _ => button::secondary,
    };
    let enabled = !error_shown || action == Action::Clear;

    button(container(text(action.label()).size(18)).center_x(Length::Fill))
        .on_press_maybe(enabled.then_some(Message::Press(action)))
        .padding(Padding::from([10, 0]))
        .width(Length::FillPortion(span))
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_covers_every_control() {
        let mut actions: Vec<Action> = KEY_ROWS.iter().flatten().copied().collect();
        actions.extend([Action::Digit('0'), Action::Digit('.'), Action::Evaluate]);

        for symbol in "0123456789.".chars() {
            assert!(actions.contains(&Action::Digit(symbol)));
        }
        for op in Operation::ALL {
            assert!(actions.contains(&Action::Operation(op)));
        }
        assert_eq!(actions.len(), 23);
    }
}
