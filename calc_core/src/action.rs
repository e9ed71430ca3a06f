//! # Actions
//!
//! Every input an adapter can forward to the engine, whatever its source:
//! a keypad button, a key press, or a scripted tag. Adapters build an
//! [`Action`] and hand it to [`CalculatorEngine::dispatch`].
//!
//! Tags follow the control names of the keypad (`number`, `add`, `equals`,
//! `memory-recall`, ...). Only `number` carries a payload, the digit or
//! decimal point pressed.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::action::Action;
//! use calc_core::operation::Operation;
//!
//! assert_eq!(Action::from_tag("number", Some("7")).unwrap(), Action::Digit('7'));
//! assert_eq!("divide".parse::<Action>().unwrap(), Action::Operation(Operation::Divide));
//! assert_eq!("number:.".parse::<Action>().unwrap(), Action::Digit('.'));
//! ```
//!
//! [`CalculatorEngine::dispatch`]: crate::engine::CalculatorEngine::dispatch

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::operation::Operation;

/// A single input for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "kebab-case")]
pub enum Action {
    /// Digit `0`-`9` or decimal point
    Digit(char),
    Operation(Operation),
    Evaluate,
    Clear,
    Backspace,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
}

impl Action {
    /// Build an action from a control tag and optional payload.
    pub fn from_tag(tag: &str, payload: Option<&str>) -> CalcResult<Action> {
        let action = match tag {
            "number" => {
                let payload = payload.ok_or_else(|| CalcError::missing_payload(tag))?;
                Action::Digit(parse_digit(payload)?)
            }
            "equals" => Action::Evaluate,
            "clear" => Action::Clear,
            "backspace" => Action::Backspace,
            "memory-clear" => Action::MemoryClear,
            "memory-recall" => Action::MemoryRecall,
            "memory-add" => Action::MemoryAdd,
            "memory-subtract" => Action::MemorySubtract,
            other => Action::Operation(other.parse()?),
        };
        Ok(action)
    }

    /// Control tag this action is produced by.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::Digit(_) => "number",
            Action::Operation(op) => op.tag(),
            Action::Evaluate => "equals",
            Action::Clear => "clear",
            Action::Backspace => "backspace",
            Action::MemoryClear => "memory-clear",
            Action::MemoryRecall => "memory-recall",
            Action::MemoryAdd => "memory-add",
            Action::MemorySubtract => "memory-subtract",
        }
    }

    /// Keypad label for the control producing this action.
    pub fn label(&self) -> String {
        match self {
            Action::Digit(symbol) => symbol.to_string(),
            Action::Operation(op) => op.symbol().to_string(),
            Action::Evaluate => "=".to_string(),
            Action::Clear => "C".to_string(),
            Action::Backspace => "⌫".to_string(),
            Action::MemoryClear => "MC".to_string(),
            Action::MemoryRecall => "MR".to_string(),
            Action::MemoryAdd => "M+".to_string(),
            Action::MemorySubtract => "M−".to_string(),
        }
    }
}

fn parse_digit(payload: &str) -> CalcResult<char> {
    let mut chars = payload.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol @ ('0'..='9' | '.')), None) => Ok(symbol),
        _ => Err(CalcError::invalid_symbol(payload)),
    }
}

/// Formats as `tag` or `number:<digit>`, the inverse of [`FromStr`].
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Digit(symbol) => write!(f, "number:{}", symbol),
            other => f.write_str(other.tag()),
        }
    }
}

impl FromStr for Action {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((tag, payload)) => Action::from_tag(tag, Some(payload)),
            None => Action::from_tag(s, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tags_parse() {
        let cases = [
            ("equals", Action::Evaluate),
            ("clear", Action::Clear),
            ("backspace", Action::Backspace),
            ("memory-clear", Action::MemoryClear),
            ("memory-recall", Action::MemoryRecall),
            ("memory-add", Action::MemoryAdd),
            ("memory-subtract", Action::MemorySubtract),
            ("add", Action::Operation(Operation::Add)),
            ("subtract", Action::Operation(Operation::Subtract)),
            ("multiply", Action::Operation(Operation::Multiply)),
            ("divide", Action::Operation(Operation::Divide)),
            ("percentage", Action::Operation(Operation::Percentage)),
        ];
        for (tag, expected) in cases {
            let action = Action::from_tag(tag, None).unwrap();
            assert_eq!(action, expected);
            assert_eq!(action.tag(), tag);
        }
    }

    #[test]
    fn test_number_payload() {
        assert_eq!(Action::from_tag("number", Some("0")).unwrap(), Action::Digit('0'));
        assert_eq!(
            Action::from_tag("number", None),
            Err(CalcError::missing_payload("number"))
        );
        assert_eq!(
            Action::from_tag("number", Some("12")),
            Err(CalcError::invalid_symbol("12"))
        );
        assert_eq!(
            Action::from_tag("number", Some("x")),
            Err(CalcError::invalid_symbol("x"))
        );
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(Action::from_tag("sqrt", None), Err(CalcError::unknown_action("sqrt")));
    }

    #[test]
    fn test_display_parses_back() {
        for action in [Action::Digit('4'), Action::MemoryAdd, Action::Operation(Operation::Divide)] {
            assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Action::Operation(Operation::Multiply).label(), "×");
        assert_eq!(Action::MemorySubtract.label(), "M−");
        assert_eq!(Action::Digit('.').label(), ".");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Action::Digit('5')).unwrap();
        assert_eq!(json, r#"{"action":"digit","value":"5"}"#);
        let json = serde_json::to_string(&Action::MemoryRecall).unwrap();
        assert_eq!(json, r#"{"action":"memory-recall"}"#);
    }
}
