//! Calculator display
//!
//! Two lines, right aligned: the pending `"prev symbol"` label above the
//! operand being typed. The operand turns red while showing "Error".

use iced::widget::{column, container, row, text, Space};
use iced::{Element, Length};

use calc_core::DisplayState;

use crate::Message;

/// Render the display panel
pub fn view_display(state: &DisplayState) -> Element<'static, Message> {
    let memory_indicator = text(if state.has_memory { "M" } else { "" })
        .size(12)
        .color([0.5, 0.5, 0.5]);

    let mut current = text(state.current.clone()).size(36);
    if state.is_error() {
        current = current.color([0.8, 0.2, 0.2]);
    }

    let content = column![
        row![
            memory_indicator,
            Space::new().width(Length::Fill),
            text(state.previous.clone()).size(14).color([0.5, 0.5, 0.5]),
        ],
        container(current).align_right(Length::Fill),
    ]
    .spacing(4);

    container(content)
        .padding(10)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
