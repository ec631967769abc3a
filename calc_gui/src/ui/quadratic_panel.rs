//! Quadratic solver panel
//!
//! Three coefficient inputs for ax² + bx + c = 0, a Solve button and the
//! result description or the error message of the last attempt.

use iced::widget::{button, column, container, row, rule, text, text_input, Column};
use iced::{Alignment, Element, Length, Padding};

use calc_core::format::format_number;
use calc_core::{CoefficientField, QuadraticSolver};

use crate::Message;

/// Render the solver form
pub fn view(solver: &QuadraticSolver) -> Element<'_, Message> {
    let mut inputs: Column<'_, Message> = column![].spacing(6);
    for field in CoefficientField::ALL {
        inputs = inputs.push(labeled_input(field, solver.coefficient(field)));
    }

    let solve_button = button(text("Solve").size(14))
        .on_press(Message::Solve)
        .padding(Padding::from([6, 16]))
        .style(button::primary);

    column![
        text("ax² + bx + c = 0").size(20),
        inputs,
        solve_button,
        rule::horizontal(1),
        view_result(solver),
    ]
    .spacing(12)
    .into()
}

fn view_result(solver: &QuadraticSolver) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(e) = solver.last_error() {
        column![text(e.user_message()).size(14).color([0.8, 0.2, 0.2])]
    } else if let Some(solution) = solver.last_solution() {
        column![
            text(solution.coefficients.equation_text()).size(12),
            text(solution.roots.description(solver.root_decimals())).size(16),
            text(format!("Discriminant: {}", format_number(solution.discriminant)))
                .size(11)
                .color([0.45, 0.45, 0.45]),
        ]
        .spacing(6)
    } else {
        column![text("Enter the coefficients and press Solve").size(12).color([0.5, 0.5, 0.5])]
    };

    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn labeled_input<'a>(field: CoefficientField, value: &'a str) -> Element<'a, Message> {
    row![
        text(format!("{}:", field.name())).size(14).width(Length::Fixed(30.0)),
        text_input("0", value)
            .on_input(move |s| Message::CoefficientChanged(field, s))
            .on_submit(Message::Solve)
            .width(Length::Fill)
            .padding(6)
            .size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}
