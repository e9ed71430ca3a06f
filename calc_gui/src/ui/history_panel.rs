//! History panel
//!
//! Lists completed calculations, most recent first.

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use crate::Message;

/// Render the history panel
pub fn view_history(history: &[String]) -> Element<'static, Message> {
    let mut entries: Column<'static, Message> = column![].spacing(4);

    if history.is_empty() {
        entries = entries.push(text("No calculations yet").size(11).color([0.5, 0.5, 0.5]));
    }
    for entry in history {
        entries = entries.push(text(entry.clone()).size(12));
    }

    let panel = column![
        text("History").size(14),
        Space::new().height(4),
        scrollable(entries).height(Length::Fill),
    ];

    container(panel)
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .into()
}
