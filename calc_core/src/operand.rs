//! # Operands
//!
//! Operands live as strings while they are being typed, exactly as the
//! display shows them. This module owns that buffer and the two conversions
//! between text and `f64`:
//!
//! - [`parse_operand`] reads the longest numeric prefix (`"12.5abc"` is 12.5,
//!   `"."` and `""` are not numbers, `"Infinity"` is infinite)
//! - [`format_number`] renders a value the way a browser prints a number:
//!   integers without a trailing `.0`, shortest round-trip digits, and
//!   exponent notation outside `1e-6..1e21`
//!
//! ## Example
//!
//! ```rust
//! use calc_core::operand::{format_number, parse_operand};
//!
//! assert_eq!(parse_operand("5."), Some(5.0));
//! assert_eq!(parse_operand("."), None);
//! assert_eq!(format_number(8.0), "8");
//! assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display form of zero, the value a buffer falls back to.
pub const ZERO: &str = "0";

/// Parse an operand string, accepting the longest valid numeric prefix.
///
/// Returns `None` when no digits lead the string (empty buffer, a lone `.`,
/// a lone sign). A dangling exponent marker (`"3e"`) is dropped rather than
/// rejected.
pub fn parse_operand(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - integer_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        end = fraction_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < bytes.len() && matches!(bytes[exponent_end], b'+' | b'-') {
            exponent_end += 1;
        }
        let exponent_digits = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits {
            end = exponent_end;
        }
    }

    trimmed[..end].parse().ok()
}

/// Format a value for the display and for history records.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Also folds negative zero into "0"
    if value == 0.0 {
        return ZERO.to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    value.to_string()
}

/// The operand currently being typed.
///
/// Holds at most one decimal point. Empty right after an operator has been
/// chosen, otherwise never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperandBuffer(String);

impl OperandBuffer {
    /// A buffer showing `"0"`.
    pub fn zero() -> Self {
        OperandBuffer(ZERO.to_string())
    }

    /// A buffer with nothing typed yet.
    pub fn empty() -> Self {
        OperandBuffer(String::new())
    }

    /// A buffer holding the display form of `value`.
    pub fn from_value(value: f64) -> Self {
        OperandBuffer(format_number(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of the buffer, if it has one.
    pub fn value(&self) -> Option<f64> {
        parse_operand(&self.0)
    }

    /// Append a digit or decimal point.
    ///
    /// Returns `false` when the symbol was ignored: anything other than
    /// `0`-`9` and `.`, or a second decimal point. A leading `"0"` is replaced
    /// by a digit but kept in front of a decimal point.
    pub fn push(&mut self, symbol: char) -> bool {
        match symbol {
            '.' if self.0.contains('.') => false,
            '.' => {
                self.0.push('.');
                true
            }
            '0'..='9' if self.0 == ZERO => {
                self.0.clear();
                self.0.push(symbol);
                true
            }
            '0'..='9' => {
                self.0.push(symbol);
                true
            }
            _ => false,
        }
    }

    /// Remove the last character, falling back to `"0"` instead of emptying.
    pub fn backspace(&mut self) {
        if self.0.chars().count() <= 1 {
            *self = OperandBuffer::zero();
        } else {
            self.0.pop();
        }
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&mut self) -> OperandBuffer {
        std::mem::replace(self, OperandBuffer::empty())
    }
}

impl Default for OperandBuffer {
    fn default() -> Self {
        OperandBuffer::zero()
    }
}

impl fmt::Display for OperandBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_operand("0"), Some(0.0));
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("-4"), Some(-4.0));
        assert_eq!(parse_operand("3.25"), Some(3.25));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("5."), Some(5.0));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("NaN"), None);
        assert_eq!(parse_operand("Error"), None);
    }

    #[test]
    fn test_parse_uses_longest_prefix() {
        assert_eq!(parse_operand("12.5abc"), Some(12.5));
        assert_eq!(parse_operand("  7"), Some(7.0));
        assert_eq!(parse_operand("3e"), Some(3.0));
        assert_eq!(parse_operand("1e+21"), Some(1e21));
        assert_eq!(parse_operand("1.5e-7"), Some(1.5e-7));
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_format_integers_and_decimals() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_exponent_and_special_values() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_formatted_values_parse_back() {
        for value in [8.0, -0.25, 1e21, 1.5e-7, 123456.789] {
            assert_eq!(parse_operand(&format_number(value)), Some(value));
        }
    }

    #[test]
    fn test_push_replaces_leading_zero() {
        let mut buffer = OperandBuffer::zero();
        assert!(buffer.push('5'));
        assert_eq!(buffer.as_str(), "5");

        let mut buffer = OperandBuffer::zero();
        assert!(buffer.push('.'));
        assert!(buffer.push('5'));
        assert_eq!(buffer.as_str(), "0.5");
    }

    #[test]
    fn test_push_rejects_second_decimal_point() {
        let mut buffer = OperandBuffer::zero();
        for symbol in ['1', '.', '2', '.', '3', '.'] {
            buffer.push(symbol);
        }
        assert_eq!(buffer.as_str(), "1.23");
        assert_eq!(buffer.as_str().matches('.').count(), 1);
    }

    #[test]
    fn test_push_ignores_other_symbols() {
        let mut buffer = OperandBuffer::zero();
        assert!(!buffer.push('a'));
        assert!(!buffer.push('+'));
        assert_eq!(buffer.as_str(), "0");
    }

    #[test]
    fn test_push_onto_empty_buffer() {
        let mut buffer = OperandBuffer::empty();
        buffer.push('.');
        buffer.push('7');
        assert_eq!(buffer.as_str(), ".7");
        assert_eq!(buffer.value(), Some(0.7));
    }

    #[test]
    fn test_backspace_never_empties() {
        let mut buffer = OperandBuffer::from_value(12.0);
        buffer.backspace();
        assert_eq!(buffer.as_str(), "1");
        buffer.backspace();
        assert_eq!(buffer.as_str(), "0");
        buffer.backspace();
        assert_eq!(buffer.as_str(), "0");

        let mut empty = OperandBuffer::empty();
        empty.backspace();
        assert_eq!(empty.as_str(), "0");
    }

    #[test]
    fn test_take_leaves_empty() {
        let mut buffer = OperandBuffer::from_value(9.0);
        let taken = buffer.take();
        assert_eq!(taken.as_str(), "9");
        assert!(buffer.is_empty());
    }
}
