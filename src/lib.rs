//! # Keypad Calculator
//!
//! A four-function calculator driven by an on-screen keypad.
//!
//! Each button press is an [`Event`] fed into the [`Calculator`] state
//! machine, which keeps the displayed number, one pending operand and one
//! pending operation. There is no operator precedence: pressing a second
//! operator reduces the running total first.

pub mod calc;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use calc::{Calculator, Event, Operation, Snapshot, format_number};
pub use keypad::{Key, KeyParseError, parse_sequence};

#[cfg(feature = "tui")]
pub use tui::run_keypad;
