#![allow(clippy::suspicious_arithmetic_impl)]
use super::{Fraction, Int};
use crate::errors::FractionError;
use std::ops;

impl Fraction {
    /// Re-normalizes a raw operator result. A denominator product that wrapped around to zero
    /// leaves nothing meaningful to reduce, so it collapses to [Fraction::ZERO].
    fn from_wrapped(numerator: Int, denominator: Int) -> Fraction {
        if denominator == 0 {
            Fraction::ZERO
        } else {
            Fraction::normalize(numerator, denominator)
        }
    }

    /// `a/b + c/d = (ad + cb) / bd`.
    ///
    /// Intermediate products wrap on overflow; see [checked_add](Fraction::checked_add).
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Fraction) -> Fraction {
        let numerator = self
            .numerator
            .wrapping_mul(other.denominator)
            .wrapping_add(other.numerator.wrapping_mul(self.denominator));
        let denominator = self.denominator.wrapping_mul(other.denominator);
        Fraction::from_wrapped(numerator, denominator)
    }

    /// `a/b - c/d = (ad - cb) / bd`.
    pub fn subtract(self, other: Fraction) -> Fraction {
        let numerator = self
            .numerator
            .wrapping_mul(other.denominator)
            .wrapping_sub(other.numerator.wrapping_mul(self.denominator));
        let denominator = self.denominator.wrapping_mul(other.denominator);
        Fraction::from_wrapped(numerator, denominator)
    }

    /// `a/b * c/d = ac / bd`.
    pub fn multiply(self, other: Fraction) -> Fraction {
        let numerator = self.numerator.wrapping_mul(other.numerator);
        let denominator = self.denominator.wrapping_mul(other.denominator);
        Fraction::from_wrapped(numerator, denominator)
    }

    /// `a/b / c/d = ad / bc`.
    ///
    /// ## Failure
    ///
    /// Fails with [DivideByZero](FractionError::DivideByZero) if `other` is the zero fraction.
    pub fn divide(self, other: Fraction) -> Result<Fraction, FractionError> {
        if other.is_zero() {
            return Err(FractionError::DivideByZero);
        }
        let numerator = self.numerator.wrapping_mul(other.denominator);
        let denominator = self.denominator.wrapping_mul(other.numerator);
        Ok(Fraction::from_wrapped(numerator, denominator))
    }

    /// [add](Fraction::add), or [None](Option::None) if the result does not fit in [Int].
    pub fn checked_add(self, other: Fraction) -> Option<Fraction> {
        let numerator = self
            .numerator
            .checked_mul(other.denominator)?
            .checked_add(other.numerator.checked_mul(self.denominator)?)?;
        let denominator = self.denominator.checked_mul(other.denominator)?;
        Fraction::checked_normalize(numerator, denominator)
    }

    /// [subtract](Fraction::subtract), or [None](Option::None) if the result does not fit in
    /// [Int].
    pub fn checked_subtract(self, other: Fraction) -> Option<Fraction> {
        let numerator = self
            .numerator
            .checked_mul(other.denominator)?
            .checked_sub(other.numerator.checked_mul(self.denominator)?)?;
        let denominator = self.denominator.checked_mul(other.denominator)?;
        Fraction::checked_normalize(numerator, denominator)
    }

    /// [multiply](Fraction::multiply), or [None](Option::None) if the result does not fit in
    /// [Int].
    pub fn checked_multiply(self, other: Fraction) -> Option<Fraction> {
        let numerator = self.numerator.checked_mul(other.numerator)?;
        let denominator = self.denominator.checked_mul(other.denominator)?;
        Fraction::checked_normalize(numerator, denominator)
    }

    /// [divide](Fraction::divide), or [None](Option::None) if `other` is zero or the result does
    /// not fit in [Int].
    pub fn checked_divide(self, other: Fraction) -> Option<Fraction> {
        let numerator = self.numerator.checked_mul(other.denominator)?;
        let denominator = self.denominator.checked_mul(other.numerator)?;
        Fraction::checked_normalize(numerator, denominator)
    }
}

/// Implements an operator for `Fraction` with `Fraction`, [Int], and `f64` on either side.
/// Non-fraction operands are converted with [Fraction::from_integer] or
/// [Fraction::from_float] before the named operation runs.
macro_rules! fraction_ops {
    ($($op:ident::$method:ident => $named:ident -> $output:ty;)*) => {$(
        impl ops::$op for Fraction {
            type Output = $output;

            fn $method(self, rhs: Fraction) -> $output {
                Fraction::$named(self, rhs)
            }
        }

        impl ops::$op<Int> for Fraction {
            type Output = $output;

            fn $method(self, rhs: Int) -> $output {
                Fraction::$named(self, Fraction::from_integer(rhs))
            }
        }

        impl ops::$op<Fraction> for Int {
            type Output = $output;

            fn $method(self, rhs: Fraction) -> $output {
                Fraction::$named(Fraction::from_integer(self), rhs)
            }
        }

        impl ops::$op<f64> for Fraction {
            type Output = $output;

            fn $method(self, rhs: f64) -> $output {
                Fraction::$named(self, Fraction::from_float(rhs))
            }
        }

        impl ops::$op<Fraction> for f64 {
            type Output = $output;

            fn $method(self, rhs: Fraction) -> $output {
                Fraction::$named(Fraction::from_float(self), rhs)
            }
        }
    )*};
}

fraction_ops! {
    Add::add => add -> Fraction;
    Sub::sub => subtract -> Fraction;
    Mul::mul => multiply -> Fraction;
    Div::div => divide -> Result<Fraction, FractionError>;
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numerator: self.numerator.wrapping_neg(),
            denominator: self.denominator,
        }
    }
}
