//! History Panel (Right Sidebar)
//!
//! Newest entry first; each mode keeps its own list.

use iced::widget::{column, container, rule, scrollable, text, Column};
use iced::{Element, Length};

use calc_core::{History, Mode};

use crate::Message;

/// Render the history sidebar for the active mode
pub fn view(history: &History, mode: Mode) -> Element<'_, Message> {
    let title = match mode {
        Mode::Standard => "History",
        Mode::Quadratic => "Solved Equations",
    };

    let mut entries: Column<'_, Message> = column![].spacing(4);
    if history.is_empty() {
        entries = entries.push(text("Nothing yet").size(11).color([0.5, 0.5, 0.5]));
    }
    for entry in history.iter() {
        entries = entries.push(
            column![
                text(entry.text()).size(12),
                text(entry.recorded_at().format("%H:%M:%S").to_string())
                    .size(9)
                    .color([0.5, 0.5, 0.5]),
            ]
            .spacing(1),
        );
    }

    let content = column![
        text(format!("{} ({}/{})", title, history.len(), history.capacity())).size(14),
        rule::horizontal(1),
        scrollable(entries).height(Length::Fill),
    ]
    .spacing(6);

    container(content)
        .padding(10)
        .width(Length::FillPortion(2))
        .height(Length::Fill)
        .style(container::bordered_box)
        .into()
}
