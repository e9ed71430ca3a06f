//! # Error Types
//!
//! Structured error types for calc_core. Only [`CalcError::DivisionByZero`]
//! comes out of the arithmetic itself; the remaining variants cover parsing
//! adapter input (action tags, key scripts) and loading settings files.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn divide(dividend: f64, divisor: f64) -> CalcResult<f64> {
//!     if divisor == 0.0 {
//!         return Err(CalcError::DivisionByZero);
//!     }
//!     Ok(dividend / divisor)
//! }
//!
//! assert_eq!(divide(6.0, 0.0).unwrap_err().error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Division with a zero divisor. The engine enters its error state.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// An action tag that no control produces
    #[error("Unknown action: '{tag}'")]
    UnknownAction { tag: String },

    /// An action tag that needs a payload (e.g. `number`) arrived without one
    #[error("Action '{tag}' requires a payload")]
    MissingPayload { tag: String },

    /// A digit payload that is not `0`-`9` or `.`
    #[error("Invalid digit symbol: '{symbol}'")]
    InvalidSymbol { symbol: String },

    /// A settings value is out of range
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSettings {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an UnknownAction error
    pub fn unknown_action(tag: impl Into<String>) -> Self {
        CalcError::UnknownAction { tag: tag.into() }
    }

    /// Create a MissingPayload error
    pub fn missing_payload(tag: impl Into<String>) -> Self {
        CalcError::MissingPayload { tag: tag.into() }
    }

    /// Create an InvalidSymbol error
    pub fn invalid_symbol(symbol: impl Into<String>) -> Self {
        CalcError::InvalidSymbol {
            symbol: symbol.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSettings {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Errors the user recovers from by waiting or pressing clear.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::DivisionByZero)
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::UnknownAction { .. } => "UNKNOWN_ACTION",
            CalcError::MissingPayload { .. } => "MISSING_PAYLOAD",
            CalcError::InvalidSymbol { .. } => "INVALID_SYMBOL",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}
