//! Standard calculator panel
//!
//! Displays:
//! - Expression line (tokens entered so far)
//! - Main display with locale grouping
//! - Key grid built from `KEYPAD_LAYOUT`, styled by key role; the operator
//!   waiting for its right operand is highlighted

use iced::widget::{button, column, container, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

use calc_core::evaluator::Token;
use calc_core::{EvaluatorState, Key, KeyRole, Operator, KEYPAD_LAYOUT};

use crate::Message;

const KEY_HEIGHT: f32 = 52.0;

/// Render the keypad calculator
pub fn view(calc: &EvaluatorState) -> Element<'_, Message> {
    let pending = pending_operator(calc);

    let mut keys: Column<'_, Message> = column![].spacing(8);
    for key_row in KEYPAD_LAYOUT {
        let mut buttons: Row<'_, Message> = row![].spacing(8);
        for key in key_row {
            buttons = buttons.push(view_key(*key, pending));
        }
        keys = keys.push(buttons);
    }

    column![view_display(calc), keys].spacing(12).into()
}

fn view_display(calc: &EvaluatorState) -> Element<'_, Message> {
    let display_color = if calc.last_error().is_some() {
        [0.8, 0.2, 0.2]
    } else {
        [0.1, 0.1, 0.1]
    };

    // Right-aligned via leading fill
    let content = column![
        row![
            Space::new().width(Length::Fill),
            text(calc.expression_line()).size(14).color([0.45, 0.45, 0.45]),
        ],
        row![
            Space::new().width(Length::Fill),
            text(calc.formatted_display()).size(40).color(display_color),
        ]
        .align_y(Alignment::End),
    ]
    .spacing(4);

    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

/// Operator just entered, while no right operand has been typed yet
fn pending_operator(calc: &EvaluatorState) -> Option<Operator> {
    if !calc.is_awaiting_operand() {
        return None;
    }
    match calc.tokens().last() {
        Some(Token::Operator(op)) => Some(*op),
        _ => None,
    }
}

fn view_key(key: Key, pending: Option<Operator>) -> Element<'static, Message> {
    let style = match key {
        Key::Operator(op) if pending == Some(op) => button::secondary,
        _ => match key.role() {
            KeyRole::Number => button::secondary,
            KeyRole::Function => button::text,
            KeyRole::Operator => button::primary,
            KeyRole::Equals => button::success,
        },
    };

    // The zero key spans two columns
    let width = if key.is_wide() {
        Length::FillPortion(2)
    } else {
        Length::FillPortion(1)
    };

    button(
        container(text(key.label()).size(20))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::KeyPressed(key))
    .width(width)
    .height(Length::Fixed(KEY_HEIGHT))
    .style(style)
    .into()
}
