//! Status Bar (Bottom)
//!
//! Shows the last error of the active mode, or the operator-precedence hint.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use calc_core::{Mode, Session};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(session: &Session) -> Element<'static, Message> {
    let error = match session.mode() {
        Mode::Standard => session.evaluator().last_error(),
        Mode::Quadratic => session.solver().last_error(),
    };

    let status = match error {
        Some(e) => text(format!("[{}] {}", e.error_code(), e.user_message()))
            .size(10)
            .color([0.8, 0.2, 0.2]),
        None => text("Ready").size(10),
    };

    let hint = match session.mode() {
        Mode::Standard => "Operators apply left to right",
        Mode::Quadratic => "Roots rounded for display only",
    };

    row![
        status,
        Space::new().width(Length::Fill),
        text(hint).size(10).color([0.5, 0.5, 0.5]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
