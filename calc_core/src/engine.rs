//! # Calculator Engine
//!
//! [`CalculatorEngine`] is the whole calculator: operand entry, the pending
//! operation, chaining, the memory register and history. Front ends own one
//! engine, forward each input through [`CalculatorEngine::dispatch`] and
//! re-render from [`CalculatorEngine::display_state`].
//!
//! ## States
//!
//! ```text
//!            choose_operation            evaluate (ok)
//!   Idle ─────────────────────▶ PendingOperation ─────────▶ Idle
//!    │                            │      ▲   │
//!    │                            │      └───┘ choose_operation (chains)
//!    │        divide by zero      ▼
//!    └──────────────────────▶  Error ──── clear / expire_error ───▶ Idle
//! ```
//!
//! While in `Error` every input except `clear` is ignored. Entering `Error`
//! issues a fresh [`ErrorToken`]; a delayed reset only clears the error it
//! was scheduled for.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::action::Action;
//! use calc_core::engine::CalculatorEngine;
//! use calc_core::operation::Operation;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.append_digit('5');
//! engine.choose_operation(Operation::Add)?;
//! engine.append_digit('3');
//! engine.dispatch(Action::Evaluate)?;
//!
//! assert_eq!(engine.current_operand(), "8");
//! assert_eq!(engine.history().lines(), ["5 + 3 = 8"]);
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::action::Action;
use crate::errors::CalcResult;
use crate::history::{History, HistoryEntry};
use crate::operand::OperandBuffer;
use crate::operation::Operation;
use crate::settings::EngineSettings;

/// Text shown in place of the operand while in the error state.
pub const ERROR_TEXT: &str = "Error";

/// Identifies one occurrence of the error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorToken(u64);

/// Where the engine is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineStatus {
    /// No operation pending
    Idle,
    /// An operator has been chosen and awaits its second operand
    PendingOperation,
    /// Division by zero; waiting for clear or the reset timer
    Error,
}

/// Everything a front end needs to render one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Operand being typed, or `"Error"`
    pub current: String,
    /// `"prev symbol"` while an operation is pending, otherwise empty
    pub previous: String,
    /// Completed calculations, most recent first
    pub history: Vec<String>,
    pub memory: f64,
    /// Memory holds a non-zero value
    pub has_memory: bool,
    pub status: EngineStatus,
}

impl DisplayState {
    pub fn is_error(&self) -> bool {
        self.status == EngineStatus::Error
    }
}

/// The calculator state machine.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    settings: EngineSettings,
    current: OperandBuffer,
    previous: OperandBuffer,
    operation: Option<Operation>,
    memory: f64,
    history: History,
    error: Option<ErrorToken>,
    errors_raised: u64,
}

impl CalculatorEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        CalculatorEngine::with_settings(EngineSettings::default())
    }

    /// Create an engine with the given settings.
    pub fn with_settings(settings: EngineSettings) -> Self {
        CalculatorEngine {
            history: History::with_capacity(settings.history_capacity),
            settings,
            current: OperandBuffer::zero(),
            previous: OperandBuffer::empty(),
            operation: None,
            memory: 0.0,
            error: None,
            errors_raised: 0,
        }
    }

    /// Apply one input.
    ///
    /// The only error is
    /// [`CalcError::DivisionByZero`](crate::errors::CalcError::DivisionByZero),
    /// returned after the engine has already entered its error state.
    /// Adapters use it to schedule the automatic reset for
    /// [`error_token`](Self::error_token).
    pub fn dispatch(&mut self, action: Action) -> CalcResult<()> {
        match action {
            Action::Digit(symbol) => self.append_digit(symbol),
            Action::Operation(op) => self.choose_operation(op)?,
            Action::Evaluate => {
                self.evaluate()?;
            }
            Action::Clear => self.clear(),
            Action::Backspace => self.backspace(),
            Action::MemoryClear => self.memory_clear(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryAdd => self.memory_add(),
            Action::MemorySubtract => self.memory_subtract(),
        }
        Ok(())
    }

    /// Type a digit or decimal point into the current operand.
    pub fn append_digit(&mut self, symbol: char) {
        if self.locked("append_digit") {
            return;
        }
        if !self.current.push(symbol) {
            trace!(%symbol, operand = %self.current, "ignored digit");
        }
    }

    /// Choose the operator to apply to the current operand.
    ///
    /// Does nothing when no operand has been typed since the last operator.
    /// With an operation already pending, that operation is evaluated first;
    /// if it divides by zero the new operator is dropped.
    pub fn choose_operation(&mut self, op: Operation) -> CalcResult<()> {
        if self.locked("choose_operation") {
            return Ok(());
        }
        if self.current.is_empty() {
            trace!(operation = op.tag(), "no operand to apply operator to");
            return Ok(());
        }
        if !self.previous.is_empty() {
            debug!(pending = ?self.operation, next = op.tag(), "chaining calculation");
            self.evaluate()?;
        }
        self.previous = self.current.take();
        self.operation = Some(op);
        Ok(())
    }

    /// Apply the pending operation.
    ///
    /// Returns the recorded calculation, or `None` when there was nothing
    /// to evaluate (no pending operation, or an operand that is not a number).
    pub fn evaluate(&mut self) -> CalcResult<Option<HistoryEntry>> {
        if self.locked("evaluate") {
            return Ok(None);
        }
        let (Some(prev), Some(current), Some(op)) =
            (self.previous.value(), self.current.value(), self.operation)
        else {
            trace!(previous = %self.previous, current = %self.current, "nothing to evaluate");
            return Ok(None);
        };

        let result = match op.apply(prev, current) {
            Ok(result) => result,
            Err(e) => {
                self.raise_error();
                return Err(e);
            }
        };

        let entry = HistoryEntry::new(prev, op, current, result);
        if let Some(evicted) = self.history.record(entry) {
            trace!(%evicted, "history full, evicted oldest entry");
        }
        debug!(calculation = %entry, "evaluated");

        self.current = OperandBuffer::from_value(result);
        self.previous = OperandBuffer::empty();
        self.operation = None;
        Ok(Some(entry))
    }

    /// Reset the operands and pending operation. Memory and history survive.
    pub fn clear(&mut self) {
        if let Some(token) = self.error.take() {
            debug!(?token, "error cleared");
        }
        self.current = OperandBuffer::zero();
        self.previous = OperandBuffer::empty();
        self.operation = None;
    }

    /// Delete the last typed character.
    pub fn backspace(&mut self) {
        if self.locked("backspace") {
            return;
        }
        self.current.backspace();
    }

    pub fn memory_clear(&mut self) {
        if self.locked("memory_clear") {
            return;
        }
        self.memory = 0.0;
    }

    /// Replace the current operand with the memory value.
    pub fn memory_recall(&mut self) {
        if self.locked("memory_recall") {
            return;
        }
        self.current = OperandBuffer::from_value(self.memory);
    }

    /// Add the current operand to memory. A non-numeric operand counts as 0.
    pub fn memory_add(&mut self) {
        if self.locked("memory_add") {
            return;
        }
        self.memory += self.current.value().unwrap_or(0.0);
    }

    /// Subtract the current operand from memory. A non-numeric operand counts as 0.
    pub fn memory_subtract(&mut self) {
        if self.locked("memory_subtract") {
            return;
        }
        self.memory -= self.current.value().unwrap_or(0.0);
    }

    /// Timed reset of the error state.
    ///
    /// Clears only if `token` names the error currently shown; returns
    /// whether it did. A reset armed for an earlier error is a no-op.
    pub fn expire_error(&mut self, token: ErrorToken) -> bool {
        if self.error != Some(token) {
            trace!(?token, current = ?self.error, "stale error reset ignored");
            return false;
        }
        self.clear();
        true
    }

    /// Token of the error being shown, if any.
    pub fn error_token(&self) -> Option<ErrorToken> {
        self.error
    }

    pub fn status(&self) -> EngineStatus {
        if self.error.is_some() {
            EngineStatus::Error
        } else if self.operation.is_some() {
            EngineStatus::PendingOperation
        } else {
            EngineStatus::Idle
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn current_operand(&self) -> &str {
        self.current.as_str()
    }

    pub fn previous_operand(&self) -> &str {
        self.previous.as_str()
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Main display line.
    pub fn display_text(&self) -> &str {
        if self.error.is_some() {
            ERROR_TEXT
        } else {
            self.current.as_str()
        }
    }

    /// Secondary display line: `"prev symbol"` while an operation is pending.
    pub fn previous_label(&self) -> String {
        match self.operation {
            Some(op) => format!("{} {}", self.previous, op.symbol()),
            None => String::new(),
        }
    }

    /// Snapshot for rendering.
    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            current: self.display_text().to_string(),
            previous: self.previous_label(),
            history: self.history.lines(),
            memory: self.memory,
            has_memory: self.memory != 0.0,
            status: self.status(),
        }
    }

    fn raise_error(&mut self) {
        self.errors_raised += 1;
        let token = ErrorToken(self.errors_raised);
        self.error = Some(token);
        debug!(?token, previous = %self.previous, "division by zero");
    }

    fn locked(&self, input: &'static str) -> bool {
        if self.error.is_some() {
            trace!(input, "input ignored while showing error");
            return true;
        }
        false
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        CalculatorEngine::new()
    }
}
