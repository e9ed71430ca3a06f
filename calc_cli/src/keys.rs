//! Terminal key handling
//!
//! Builds on the standard keymap from calc_core. A terminal has no keypad
//! buttons for percentage, clear or the memory register, so those get
//! letter shortcuts here:
//!
//! | Key | Action          |
//! |-----|-----------------|
//! | `%` | percentage      |
//! | `c` | clear           |
//! | `r` | memory recall   |
//! | `m` | memory add      |
//! | `n` | memory subtract |
//! | `x` | memory clear    |
//!
//! `q` and `Ctrl+C` quit the TUI.

use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use calc_core::{action_for_key, Action, Key, Operation};

/// What a terminal key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Input(Action),
    Quit,
}

/// Letter shortcuts for controls without a standard key.
pub fn shortcut(symbol: char) -> Option<Action> {
    match symbol {
        '%' => Some(Action::Operation(Operation::Percentage)),
        'c' => Some(Action::Clear),
        'r' => Some(Action::MemoryRecall),
        'm' => Some(Action::MemoryAdd),
        'n' => Some(Action::MemorySubtract),
        'x' => Some(Action::MemoryClear),
        _ => None,
    }
}

/// Standard binding first, then the terminal shortcuts.
pub fn action_for_char(symbol: char) -> Option<Action> {
    action_for_key(Key::Char(symbol)).or_else(|| shortcut(symbol))
}

/// Translate a crossterm key event. Releases and repeats are dropped.
pub fn command_for_event(event: &KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char(symbol) => action_for_char(symbol).map(Command::Input),
        KeyCode::Enter => action_for_key(Key::Enter).map(Command::Input),
        KeyCode::Esc => action_for_key(Key::Escape).map(Command::Input),
        KeyCode::Backspace => action_for_key(Key::Backspace).map(Command::Input),
        _ => None,
    }
}

/// Turn a key script such as `"12+30="` into actions. Whitespace is skipped.
pub fn parse_script(script: &str) -> Result<Vec<Action>> {
    script
        .chars()
        .filter(|symbol| !symbol.is_whitespace())
        .map(|symbol| {
            action_for_char(symbol).ok_or_else(|| anyhow!("Unrecognized key '{}' in script", symbol))
        })
        .collect()
}
