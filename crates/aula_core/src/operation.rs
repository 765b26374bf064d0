use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Error: you must enter valid integers")]
    InvalidOperand,
    #[error("Error: division by zero")]
    DivisionByZero,
    #[error("Error: result out of range")]
    Overflow,
    #[error("Invalid option")]
    InvalidOption,
}

/// Integer result, or the true quotient produced by `Divide`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalcValue {
    Integer(i64),
    Quotient(f64),
}

impl fmt::Display for CalcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcValue::Integer(value) => write!(f, "{value}"),
            CalcValue::Quotient(value) => write_quotient(f, *value),
        }
    }
}

/// Shortest round-trip digits; scientific form (`1e+16`, `1.5e-05`) once the
/// decimal exponent leaves `-4..16`, otherwise whole values keep `.0`.
fn write_quotient(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    } else if value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Matches the literal menu label, case-sensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.label() == label)
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    pub fn apply(self, lhs: i64, rhs: i64) -> Result<CalcValue, CalcError> {
        let integer = |value: Option<i64>| value.map(CalcValue::Integer).ok_or(CalcError::Overflow);
        match self {
            Operation::Add => integer(lhs.checked_add(rhs)),
            Operation::Subtract => integer(lhs.checked_sub(rhs)),
            Operation::Multiply => integer(lhs.checked_mul(rhs)),
            Operation::Divide if rhs == 0 => Err(CalcError::DivisionByZero),
            Operation::Divide => Ok(CalcValue::Quotient(lhs as f64 / rhs as f64)),
        }
    }
}

pub(crate) fn parse_operand(input: &str) -> Result<i64, CalcError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| CalcError::InvalidOperand)
}
