//! Pending binary operations.

use serde::{Serialize, Deserialize};

/// A binary operation waiting for its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`, yielding zero for a zero divisor.
    Divide,
    /// `=`: no transform, the second operand passes through.
    PassThrough,
}

impl Operation {
    /// The four operations reachable from the keypad.
    pub const ARITHMETIC: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Subtract,
        Operation::Add,
    ];

    /// ASCII symbol of the operation.
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
            Operation::PassThrough => '=',
        }
    }

    /// Parse an ASCII operator symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' => Some(Operation::Multiply),
            '/' => Some(Operation::Divide),
            '=' => Some(Operation::PassThrough),
            _ => None,
        }
    }

    /// Combine the pending operand `a` with the freshly entered `b`.
    ///
    /// Division by zero returns `0.0` rather than an infinity or an error.
    pub fn reduce(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    tracing::warn!(dividend = a, "division by zero, substituting 0");
                    0.0
                }
            }
            Operation::PassThrough => b,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_arithmetic() {
        assert_eq!(Operation::Add.reduce(5.0, 3.0), 8.0);
        assert_eq!(Operation::Subtract.reduce(5.0, 3.0), 2.0);
        assert_eq!(Operation::Multiply.reduce(5.0, 3.0), 15.0);
        assert_eq!(Operation::Divide.reduce(6.0, 3.0), 2.0);
    }

    #[test]
    fn test_divide_by_zero_yields_zero() {
        assert_eq!(Operation::Divide.reduce(6.0, 0.0), 0.0);
        assert_eq!(Operation::Divide.reduce(-6.0, -0.0), 0.0);
        assert_eq!(Operation::Divide.reduce(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_pass_through_returns_second_operand() {
        assert_eq!(Operation::PassThrough.reduce(100.0, 7.5), 7.5);
    }

    #[test]
    fn test_symbol_roundtrip() {
        for op in Operation::ARITHMETIC {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_symbol('='), Some(Operation::PassThrough));
        assert_eq!(Operation::from_symbol('%'), None);
    }
}
