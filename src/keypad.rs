//! On-screen keypad surface.
//!
//! Maps every button to its face label, its stable test identifier and the
//! [`Event`] it feeds into the calculator.

use crate::calc::{Event, Operation};
use serde::{Serialize, Deserialize};
use std::str::FromStr;
use thiserror::Error;

/// Test identifier of the display region.
pub const DISPLAY_TEST_ID: &str = "calculator-display";

/// Keypad errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("unknown key: {0:?}")]
    Unknown(String),
}

/// A keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Digit button `0..=9`.
    Digit(u8),
    Decimal,
    Clear,
    /// One of the four arithmetic operators.
    Operator(Operation),
    Equals,
}

impl Key {
    /// Every button, once.
    pub const ALL: [Key; 17] = [
        Key::Digit(0),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Decimal,
        Key::Clear,
        Key::Operator(Operation::Divide),
        Key::Operator(Operation::Multiply),
        Key::Operator(Operation::Subtract),
        Key::Operator(Operation::Add),
        Key::Equals,
    ];

    /// Digit button, if `d` is a single decimal digit.
    pub fn digit(d: u8) -> Option<Key> {
        (d <= 9).then_some(Key::Digit(d))
    }

    /// Text printed on the button face.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Key::Digit(d) => DIGITS.get(usize::from(d)).copied().unwrap_or("?"),
            Key::Decimal => ".",
            Key::Clear => "AC",
            Key::Operator(Operation::Divide) => "÷",
            Key::Operator(Operation::Multiply) => "×",
            Key::Operator(Operation::Subtract) => "−",
            Key::Operator(Operation::Add) => "+",
            Key::Operator(Operation::PassThrough) | Key::Equals => "=",
        }
    }

    /// Stable identifier used by automated tests.
    pub fn test_id(self) -> String {
        match self {
            Key::Digit(d) if d <= 9 => format!("number-{}", d),
            Key::Digit(_) => "unknown-button".into(),
            Key::Decimal => "decimal-button".into(),
            Key::Clear => "clear-button".into(),
            Key::Operator(Operation::Divide) => "divide-button".into(),
            Key::Operator(Operation::Multiply) => "multiply-button".into(),
            Key::Operator(Operation::Subtract) => "subtract-button".into(),
            Key::Operator(Operation::Add) => "add-button".into(),
            Key::Operator(Operation::PassThrough) | Key::Equals => "equals-button".into(),
        }
    }

    /// The event this button feeds into the calculator.
    pub fn event(self) -> Event {
        match self {
            Key::Digit(d) => Event::Digit(d),
            Key::Decimal => Event::Decimal,
            Key::Clear => Event::Clear,
            Key::Operator(Operation::PassThrough) | Key::Equals => Event::Equals,
            Key::Operator(op) => Event::Operator(op),
        }
    }

    /// Look up a button by its test identifier.
    pub fn from_test_id(id: &str) -> Option<Key> {
        Key::ALL.into_iter().find(|k| k.test_id() == id)
    }

    /// Look up a button by face label or ASCII symbol.
    fn from_symbol(s: &str) -> Option<Key> {
        if let Some(key) = Key::ALL.into_iter().find(|k| k.label() == s) {
            return Some(key);
        }
        match s {
            "C" | "c" | "ac" => Some(Key::Clear),
            "*" | "x" => Some(Key::Operator(Operation::Multiply)),
            "/" => Some(Key::Operator(Operation::Divide)),
            "-" => Some(Key::Operator(Operation::Subtract)),
            _ => None,
        }
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    /// Accepts a test id (`number-5`), a face label (`×`) or an ASCII
    /// symbol (`*`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Key::from_test_id(s)
            .or_else(|| Key::from_symbol(s))
            .ok_or_else(|| KeyParseError::Unknown(s.to_string()))
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse a whitespace-separated press sequence such as `"5 + 3 ="`.
///
/// A token of several digits (`"52"`) expands to one press per digit.
pub fn parse_sequence(input: &str) -> Result<Vec<Key>, KeyParseError> {
    let mut keys = Vec::new();
    for token in input.split_whitespace() {
        if token.len() > 1 && token.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            for c in token.chars() {
                keys.push(Key::from_str(&c.to_string())?);
            }
        } else {
            keys.push(token.parse()?);
        }
    }
    Ok(keys)
}

/// Number of keypad rows.
pub const ROWS: usize = 5;

/// Number of keypad columns.
pub const COLUMNS: usize = 4;

/// Button grid, top row first. `None` cells are empty.
pub const KEYPAD_LAYOUT: [[Option<Key>; COLUMNS]; ROWS] = [
    [
        Some(Key::Clear),
        Some(Key::Operator(Operation::Divide)),
        Some(Key::Operator(Operation::Multiply)),
        Some(Key::Operator(Operation::Subtract)),
    ],
    [Some(Key::Digit(7)), Some(Key::Digit(8)), Some(Key::Digit(9)), Some(Key::Operator(Operation::Add))],
    [Some(Key::Digit(4)), Some(Key::Digit(5)), Some(Key::Digit(6)), Some(Key::Equals)],
    [Some(Key::Digit(1)), Some(Key::Digit(2)), Some(Key::Digit(3)), Some(Key::Decimal)],
    [Some(Key::Digit(0)), None, None, None],
];

/// Grid position `(row, col)` of a key.
pub fn position_of(key: Key) -> Option<(usize, usize)> {
    KEYPAD_LAYOUT.iter().enumerate().find_map(|(row, cells)| {
        cells.iter().position(|c| *c == Some(key)).map(|col| (row, col))
    })
}

/// Key at a grid position, if any.
pub fn key_at(row: usize, col: usize) -> Option<Key> {
    KEYPAD_LAYOUT.get(row).and_then(|cells| cells.get(col)).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_test_ids_are_unique() {
        let ids: HashSet<String> = Key::ALL.iter().map(|k| k.test_id()).collect();
        assert_eq!(ids.len(), Key::ALL.len());
        assert!(!ids.contains(DISPLAY_TEST_ID));
    }

    #[test]
    fn test_out_of_range_digit() {
        assert_eq!(Key::digit(9), Some(Key::Digit(9)));
        assert_eq!(Key::digit(12), None);
        assert_eq!(Key::Digit(12).label(), "?");
        assert_eq!(Key::Digit(12).test_id(), "unknown-button");
        assert_eq!(Key::from_test_id("number-12"), None);
    }

    #[test]
    fn test_test_id_lookup() {
        assert_eq!(Key::from_test_id("number-7"), Some(Key::Digit(7)));
        assert_eq!(Key::from_test_id("clear-button"), Some(Key::Clear));
        assert_eq!(Key::from_test_id("divide-button"), Some(Key::Operator(Operation::Divide)));
        assert_eq!(Key::from_test_id("equals-button"), Some(Key::Equals));
        assert_eq!(Key::from_test_id("number-10"), None);
    }

    #[test]
    fn test_operator_labels_map_to_symbols() {
        let pairs = [("÷", '/'), ("×", '*'), ("−", '-'), ("+", '+')];
        for (label, symbol) in pairs {
            let key: Key = label.parse().unwrap();
            assert_eq!(key.event(), Event::Operator(Operation::from_symbol(symbol).unwrap()));
        }
    }

    #[test]
    fn test_parse_ascii_symbols() {
        assert_eq!("*".parse::<Key>().unwrap(), Key::Operator(Operation::Multiply));
        assert_eq!("-".parse::<Key>().unwrap(), Key::Operator(Operation::Subtract));
        assert_eq!("AC".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("=".parse::<Key>().unwrap(), Key::Equals);
        assert_eq!(".".parse::<Key>().unwrap(), Key::Decimal);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!("%".parse::<Key>(), Err(KeyParseError::Unknown("%".into())));
    }

    #[test]
    fn test_parse_sequence_expands_numbers() {
        let keys = parse_sequence("12.5 × 2 =").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(1),
                Key::Digit(2),
                Key::Decimal,
                Key::Digit(5),
                Key::Operator(Operation::Multiply),
                Key::Digit(2),
                Key::Equals,
            ]
        );
        assert!(parse_sequence("1 ^ 2").is_err());
    }

    #[test]
    fn test_layout_holds_every_key_once() {
        for key in Key::ALL {
            assert!(position_of(key).is_some(), "{:?} missing from layout", key);
        }
        let cells = KEYPAD_LAYOUT.iter().flatten().flatten().count();
        assert_eq!(cells, Key::ALL.len());
        assert_eq!(key_at(4, 0), Some(Key::Digit(0)));
        assert_eq!(key_at(4, 1), None);
        assert_eq!(key_at(9, 9), None);
    }
}
