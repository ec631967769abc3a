//! Toolbar component
//!
//! Application title plus the button that flips between the two calculators.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::Mode;

use crate::Message;

/// Render the application header
///
/// The switch button is labelled with the mode it leads to.
pub fn view_header(mode: Mode) -> Element<'static, Message> {
    let subtitle = match mode {
        Mode::Standard => "Standard Calculator",
        Mode::Quadratic => "Quadratic Equation Solver",
    };

    let switch_button = button(text(mode.switch_target_label()).size(12))
        .on_press(Message::SwitchMode)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        text("Keypad").size(28),
        Space::new().width(12),
        text(subtitle).size(14),
        Space::new().width(Length::Fill),
        switch_button,
    ]
    .align_y(Alignment::Center)
    .into()
}
