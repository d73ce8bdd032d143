//! The four arithmetic operators

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Type-safe operator enum - only the four keypad operators exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the keyboard symbol
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the symbol shown on buttons and in the history display
    #[must_use]
    pub const fn display_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Short name used in element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Parses a keyboard symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_symbol())
    }
}

/// Applies `op` to the operands.
///
/// Produces no value when dividing by zero or when the result is not a
/// finite number.
pub fn apply(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            a / b
        }
    };
    if !result.is_finite() {
        return Err(CalcError::Overflow);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operator enum tests ---

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '*');
        assert_eq!(Operator::Divide.symbol(), '/');
    }

    #[test]
    fn test_operator_display_symbols() {
        assert_eq!(Operator::Add.display_symbol(), '+');
        assert_eq!(Operator::Subtract.display_symbol(), '−');
        assert_eq!(Operator::Multiply.display_symbol(), '×');
        assert_eq!(Operator::Divide.display_symbol(), '÷');
        assert_eq!(Operator::Divide.to_string(), "÷");
    }

    #[test]
    fn test_operator_from_symbol_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert_eq!(Operator::from_symbol(op.display_symbol()), Some(op));
        }
    }

    #[test]
    fn test_operator_from_symbol_aliases() {
        assert_eq!(Operator::from_symbol('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('X'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('%'), None);
        assert_eq!(Operator::from_symbol('^'), None);
    }

    #[test]
    fn test_operator_names_unique() {
        let names: std::collections::HashSet<_> = Operator::ALL.iter().map(Operator::name).collect();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_operator_serde() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
        let op: Operator = serde_json::from_str("\"divide\"").unwrap();
        assert_eq!(op, Operator::Divide);
    }

    // --- apply tests ---

    #[test]
    fn test_apply_add() {
        assert_eq!(apply(2.0, 3.0, Operator::Add), Ok(5.0));
        assert_eq!(apply(-2.0, 5.0, Operator::Add), Ok(3.0));
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(apply(10.0, 4.0, Operator::Subtract), Ok(6.0));
        assert_eq!(apply(4.0, 10.0, Operator::Subtract), Ok(-6.0));
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(apply(6.0, 7.0, Operator::Multiply), Ok(42.0));
        assert_eq!(apply(5.0, 0.0, Operator::Multiply), Ok(0.0));
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(apply(20.0, 4.0, Operator::Divide), Ok(5.0));
        assert_eq!(apply(7.0, 2.0, Operator::Divide), Ok(3.5));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(apply(5.0, 0.0, Operator::Divide), Err(CalcError::DivideByZero));
        assert_eq!(apply(0.0, 0.0, Operator::Divide), Err(CalcError::DivideByZero));
        assert_eq!(apply(5.0, -0.0, Operator::Divide), Err(CalcError::DivideByZero));
    }

    #[test]
    fn test_apply_overflow() {
        assert_eq!(apply(f64::MAX, 2.0, Operator::Multiply), Err(CalcError::Overflow));
        assert_eq!(apply(f64::MAX, f64::MAX, Operator::Add), Err(CalcError::Overflow));
        assert_eq!(apply(-f64::MAX, f64::MAX, Operator::Subtract), Err(CalcError::Overflow));
        assert_eq!(apply(f64::MAX, 0.5, Operator::Divide), Err(CalcError::Overflow));
        assert_eq!(apply(f64::INFINITY, 1.0, Operator::Add), Err(CalcError::Overflow));
    }

    #[test]
    fn test_apply_zero_dividend() {
        assert_eq!(apply(0.0, 5.0, Operator::Divide), Ok(0.0));
    }

    // --- Property tests ---

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(apply(a, b, Operator::Add), apply(b, a, Operator::Add));
        }

        #[test]
        fn prop_multiply_commutative(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(apply(a, b, Operator::Multiply), apply(b, a, Operator::Multiply));
        }

        #[test]
        fn prop_divide_nonzero_never_errors(a in -1e6f64..1e6, b in 1e-3f64..1e6) {
            prop_assert!(apply(a, b, Operator::Divide).is_ok());
            prop_assert!(apply(a, -b, Operator::Divide).is_ok());
        }

        #[test]
        fn prop_divide_by_zero_always_errors(a in -1e6f64..1e6) {
            prop_assert_eq!(apply(a, 0.0, Operator::Divide), Err(CalcError::DivideByZero));
        }
    }
}
