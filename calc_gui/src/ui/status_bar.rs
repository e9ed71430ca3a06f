//! Status Bar (Bottom)
//!
//! Displays:
//! - Engine state (ready, waiting for operand, error)
//! - Memory register value when non-zero

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::operand::format_number;
use calc_core::{DisplayState, EngineStatus};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(state: &DisplayState) -> Element<'static, Message> {
    let status = match state.status {
        EngineStatus::Idle => text("Ready").size(10),
        EngineStatus::PendingOperation => text("Waiting for operand").size(10),
        EngineStatus::Error => text("Cannot divide by zero").size(10).color([0.6, 0.3, 0.0]),
    };

    let memory_info = if state.has_memory {
        format!("M = {}", format_number(state.memory))
    } else {
        String::new()
    };

    row![
        status,
        Space::new().width(Length::Fill),
        text(memory_info).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
