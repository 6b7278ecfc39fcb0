//! Terminal front end for the keypad calculator.
//!
//! Renders the display and the button grid with ratatui and dispatches
//! crossterm input:
//! - Arrow keys move the focus across the grid
//! - Enter/Space presses the focused button
//! - Left mouse click presses the button under the cursor

mod app;
mod ui;

pub use app::{CalculatorApp, Direction, run_keypad};
