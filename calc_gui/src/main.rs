//! # Keypad Calculator GUI
//!
//! Graphical front end for calc_core: a standard keypad calculator and a
//! quadratic equation solver sharing one window.
//! Built with Iced framework for cross-platform support (Windows, macOS, Linux, WASM).
//!
//! Settings are read from the JSON file named by `KEYPAD_SETTINGS` (native only);
//! logging honours `RUST_LOG`.

mod ui;

use iced::widget::{column, container, row, rule};
use iced::{Element, Length, Size};

use calc_core::{CalculatorSettings, CoefficientField, Key, Mode, Session};

/// Environment variable naming the settings file
#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_ENV: &str = "KEYPAD_SETTINGS";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run()
}

#[cfg(target_arch = "wasm32")]
fn main() -> iced::Result {
    console_error_panic_hook::set_once();
    run()
}

fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title("Keypad Calculator")
        .window_size(Size::new(760.0, 560.0))
        .run()
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Flip between the keypad and the quadratic solver
    SwitchMode,
    KeyPressed(Key),
    CoefficientChanged(CoefficientField, String),
    Solve,
}

/// Main application state
pub struct App {
    session: Session,
}

impl Default for App {
    fn default() -> Self {
        Self::with_settings(CalculatorSettings::default())
    }
}

impl App {
    fn new() -> Self {
        Self::with_settings(load_settings())
    }

    fn with_settings(settings: CalculatorSettings) -> Self {
        Self {
            session: Session::new(settings),
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::SwitchMode => {
                self.session.toggle_mode();
            }
            Message::KeyPressed(key) => {
                // Failures surface through the display's error indicator
                if let Err(e) = self.session.evaluator_mut().press(key) {
                    tracing::debug!(code = e.error_code(), "key {} failed: {}", key, e);
                }
            }
            Message::CoefficientChanged(field, value) => {
                self.session.solver_mut().set_coefficient(field, value);
            }
            Message::Solve => {
                if let Err(e) = self.session.solver_mut().solve_current() {
                    tracing::debug!(code = e.error_code(), "solve failed: {}", e);
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(self.session.mode());

        let (main_panel, history) = match self.session.mode() {
            Mode::Standard => (
                ui::keypad_panel::view(self.session.evaluator()),
                self.session.evaluator().history(),
            ),
            Mode::Quadratic => (
                ui::quadratic_panel::view(self.session.solver()),
                self.session.solver().history(),
            ),
        };

        let body = row![
            container(main_panel).width(Length::FillPortion(3)),
            ui::history_panel::view(history, self.session.mode()),
        ]
        .spacing(15)
        .height(Length::Fill);

        let status = ui::status_bar::view_status_bar(&self.session);

        container(column![header, rule::horizontal(1), body, rule::horizontal(1), status].spacing(10))
            .padding(15)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> CalculatorSettings {
    let Some(path) = std::env::var_os(SETTINGS_ENV) else {
        return CalculatorSettings::default();
    };

    match CalculatorSettings::load(std::path::Path::new(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("{}; using defaults", e.user_message());
            CalculatorSettings::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_settings() -> CalculatorSettings {
    CalculatorSettings::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::Operator;

    fn press_all(app: &mut App, keys: &[Key]) {
        for key in keys {
            app.update(Message::KeyPressed(*key));
        }
    }

    #[test]
    fn test_keypad_messages_drive_evaluator() {
        let mut app = App::default();
        press_all(
            &mut app,
            &[
                Key::Digit(2),
                Key::Operator(Operator::Add),
                Key::Digit(3),
                Key::Operator(Operator::Multiply),
                Key::Digit(4),
                Key::Equals,
            ],
        );
        assert_eq!(app.session.evaluator().display(), "20");
        assert_eq!(app.session.evaluator().history().texts(), vec!["2 + 3 × 4 = 20"]);
    }

    #[test]
    fn test_division_by_zero_shows_indicator() {
        let mut app = App::default();
        press_all(
            &mut app,
            &[Key::Digit(6), Key::Operator(Operator::Divide), Key::Digit(0), Key::Equals],
        );
        assert_eq!(app.session.evaluator().display(), "Error");
        assert!(app.session.evaluator().history().is_empty());
    }

    #[test]
    fn test_solver_messages() {
        let mut app = App::default();
        app.update(Message::SwitchMode);
        assert_eq!(app.session.mode(), Mode::Quadratic);

        app.update(Message::CoefficientChanged(CoefficientField::A, "1".to_string()));
        app.update(Message::CoefficientChanged(CoefficientField::B, "-3".to_string()));
        app.update(Message::CoefficientChanged(CoefficientField::C, "2".to_string()));
        app.update(Message::Solve);

        let solver = app.session.solver();
        assert_eq!(solver.last_solution().map(|s| s.roots.count()), Some(2));
        assert_eq!(solver.history().len(), 1);
    }

    #[test]
    fn test_switch_button_caption_follows_mode() {
        let mut app = App::default();
        assert_eq!(app.session.mode().switch_target_label(), "Quadratic");

        app.update(Message::SwitchMode);
        assert_eq!(app.session.mode().switch_target_label(), "Standard Calc");
    }

    #[test]
    fn test_mode_switch_keeps_state() {
        let mut app = App::default();
        press_all(&mut app, &[Key::Digit(7)]);
        app.update(Message::SwitchMode);
        app.update(Message::CoefficientChanged(CoefficientField::A, "5".to_string()));
        app.update(Message::SwitchMode);

        assert_eq!(app.session.evaluator().display(), "7");
        assert_eq!(app.session.solver().coefficient(CoefficientField::A), "5");
    }
}
