//! UI module for the keypad calculator GUI
//!
//! # Panel Structure
//! - `toolbar` - Title and the mode switch button
//! - `keypad_panel` - Standard calculator: expression line, display, key grid
//! - `quadratic_panel` - Coefficient inputs, Solve button, result or error
//! - `history_panel` - Right sidebar with the active mode's history
//! - `status_bar` - Bottom status line

pub mod toolbar;
pub mod keypad_panel;
pub mod quadratic_panel;
pub mod history_panel;
pub mod status_bar;
