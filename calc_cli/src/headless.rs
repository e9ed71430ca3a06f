//! Scripted (non-interactive) mode
//!
//! Runs a list of actions against an engine and reports the final display,
//! either as plain text or as the `DisplayState` JSON.

use calc_core::{Action, CalculatorEngine, DisplayState};

/// Dispatch every action in order.
///
/// Division by zero leaves the engine showing "Error"; there is no reset
/// timer in this mode, so the error stays until a later `clear` action.
pub fn run(engine: &mut CalculatorEngine, actions: &[Action]) {
    for action in actions {
        if let Err(e) = engine.dispatch(*action) {
            tracing::debug!(%action, error = %e, "action raised error");
        }
    }
}

/// Plain-text report of a display state.
pub fn render_report(state: &DisplayState) -> String {
    let mut lines = vec![format!("Display: {}", state.current)];
    if !state.previous.is_empty() {
        lines.push(format!("Pending: {}", state.previous));
    }
    if state.has_memory {
        lines.push(format!("Memory:  {}", calc_core::operand::format_number(state.memory)));
    }
    if !state.history.is_empty() {
        lines.push("History:".to_string());
        for (i, entry) in state.history.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, entry));
        }
    }
    lines.join("\n")
}
