//! The input-accumulation state machine.
//!
//! Button presses arrive one at a time as [`Event`]s. The machine keeps the
//! text being shown, the operand and operation captured by the last operator
//! press, and whether the next digit starts a fresh number.

use crate::calc::format::format_number;
use crate::calc::Operation;
use serde::{Serialize, Deserialize};

/// A single button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A digit `0..=9`. Values above 9 are ignored.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// A binary operator.
    Operator(Operation),
    /// Complete the pending operation.
    Equals,
    /// Reset everything (`AC`).
    Clear,
}

/// Serializable copy of the machine's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub display: String,
    pub pending_operand: Option<f64>,
    pub pending_operation: Option<Operation>,
    pub awaiting_fresh_entry: bool,
}

/// Four-function accumulator calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Text currently shown.
    display: String,
    /// First operand, captured on the first operator press.
    pending_operand: Option<f64>,
    /// Operation applied when the second operand is complete.
    pending_operation: Option<Operation>,
    /// Next digit replaces the display instead of extending it.
    awaiting_fresh_entry: bool,
}

impl Calculator {
    /// Create a calculator showing `0` with nothing pending.
    pub fn new() -> Self {
        Self {
            display: "0".into(),
            pending_operand: None,
            pending_operation: None,
            awaiting_fresh_entry: false,
        }
    }

    /// Text currently shown.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }

    pub fn awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    /// Numeric value of the display.
    pub fn value(&self) -> f64 {
        match self.display.parse::<f64>() {
            Ok(v) => v,
            Err(e) => {
                // Unreachable while the display stays a decimal literal.
                tracing::error!(display = %self.display, error = %e, "display is not a number");
                0.0
            }
        }
    }

    /// Apply one event and return the updated display.
    pub fn press(&mut self, event: Event) -> &str {
        match event {
            Event::Digit(d) => self.input_digit(d),
            Event::Decimal => self.input_decimal(),
            Event::Operator(op) => self.perform_operation(op),
            Event::Equals => self.equals(),
            Event::Clear => self.clear(),
        }
        tracing::debug!(
            ?event,
            display = %self.display,
            operand = ?self.pending_operand,
            operation = ?self.pending_operation,
            "event applied"
        );
        &self.display
    }

    /// Apply a sequence of events in order.
    pub fn press_all<I: IntoIterator<Item = Event>>(&mut self, events: I) -> &str {
        for event in events {
            self.press(event);
        }
        &self.display
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn input_digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            tracing::warn!(digit = d, "ignoring out-of-range digit");
            return;
        };

        if self.awaiting_fresh_entry {
            self.display = c.to_string();
            self.awaiting_fresh_entry = false;
        } else if self.display == "0" {
            self.display = c.to_string();
        } else {
            let mut extended = self.display.clone();
            extended.push(c);
            if !extended.parse::<f64>().is_ok_and(f64::is_finite) {
                tracing::warn!(len = self.display.len(), "entry would overflow, ignoring digit");
                return;
            }
            self.display = extended;
        }
    }

    fn input_decimal(&mut self) {
        if self.awaiting_fresh_entry {
            self.display = "0.".into();
            self.awaiting_fresh_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn perform_operation(&mut self, next: Operation) {
        let input = self.value();

        match (self.pending_operand, self.pending_operation) {
            (None, _) => self.pending_operand = Some(input),
            (Some(current), Some(op)) => {
                let result = op.reduce(current, input);
                self.display = format_number(result);
                self.pending_operand = Some(self.value());
            }
            (Some(_), None) => {}
        }

        self.awaiting_fresh_entry = true;
        self.pending_operation = Some(next);
    }

    fn equals(&mut self) {
        let (Some(current), Some(op)) = (self.pending_operand, self.pending_operation) else {
            return;
        };

        let result = op.reduce(current, self.value());
        self.display = format_number(result);
        self.pending_operand = None;
        self.pending_operation = None;
        self.awaiting_fresh_entry = true;
    }

    /// Copy of the machine's fields.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            pending_operand: self.pending_operand,
            pending_operation: self.pending_operation,
            awaiting_fresh_entry: self.awaiting_fresh_entry,
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
