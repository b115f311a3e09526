//! Errors produced by fraction construction and division.

use std::fmt;

/// A fraction operation that cannot produce a value.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum FractionError {
    /// A fraction was constructed with a zero denominator.
    InvalidArgument,
    /// A fraction was divided by the zero fraction.
    DivideByZero,
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::InvalidArgument => write!(f, "Denominator cannot be zero."),
            FractionError::DivideByZero => write!(f, "Cannot divide by zero fraction."),
        }
    }
}

impl std::error::Error for FractionError {}
