//! Four-function accumulator calculator.
//!
//! This module provides the core of the keypad calculator:
//! - [`Operation`] - A pending binary operation and its reduction
//! - [`Calculator`] - The input-accumulation state machine
//! - [`Event`] - A single button press fed into the machine

mod op;
mod state;
pub mod format;

pub use op::Operation;
pub use state::{Calculator, Event, Snapshot};
pub use format::format_number;
