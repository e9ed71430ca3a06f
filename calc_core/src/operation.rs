//! # Operations
//!
//! The five binary operators a calculation can be pending on. Each has a
//! fixed display symbol and a tag (`"add"`, `"divide"`, ...) matching the
//! button tags adapters emit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A binary operator awaiting its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `prev * current / 100`
    Percentage,
}

impl Operation {
    /// All operations, in keypad order.
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Percentage,
    ];

    /// Symbol shown on the display, in history and on the keypad.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Percentage => "%",
        }
    }

    /// Tag used by controls and in serialized form.
    pub fn tag(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Percentage => "percentage",
        }
    }

    /// Apply the operation to `prev` and `current`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::operation::Operation;
    ///
    /// assert_eq!(Operation::Percentage.apply(50.0, 20.0).unwrap(), 10.0);
    /// assert!(Operation::Divide.apply(6.0, 0.0).is_err());
    /// ```
    pub fn apply(&self, prev: f64, current: f64) -> CalcResult<f64> {
        match self {
            Operation::Add => Ok(prev + current),
            Operation::Subtract => Ok(prev - current),
            Operation::Multiply => Ok(prev * current),
            Operation::Divide => {
                if current == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(prev / current)
            }
            Operation::Percentage => Ok((prev * current) / 100.0),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.tag() == s)
            .ok_or_else(|| CalcError::unknown_action(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        let symbols: Vec<_> = Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, ["+", "−", "×", "÷", "%"]);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Operation::Add.apply(5.0, 3.0).unwrap(), 8.0);
        assert_eq!(Operation::Subtract.apply(5.0, 3.0).unwrap(), 2.0);
        assert_eq!(Operation::Multiply.apply(5.0, 3.0).unwrap(), 15.0);
        assert_eq!(Operation::Divide.apply(6.0, 3.0).unwrap(), 2.0);
        assert_eq!(Operation::Percentage.apply(200.0, 15.0).unwrap(), 30.0);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operation::Divide.apply(6.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operation::Divide.apply(6.0, -0.0), Err(CalcError::DivisionByZero));
        // Only division checks its divisor
        assert_eq!(Operation::Percentage.apply(6.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_parse_tags() {
        for op in Operation::ALL {
            assert_eq!(op.tag().parse::<Operation>().unwrap(), op);
        }
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(CalcError::unknown_action("modulo"))
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Operation::Percentage).unwrap();
        assert_eq!(json, "\"percentage\"");
    }
}
