use super::{Fraction, Int};

/// Distance from a whole number below which [Fraction::from_float] treats its input as that
/// whole number.
pub const FLOAT_TOLERANCE: f64 = 1.0e-6;

/// Denominator of the fractional part built by [Fraction::from_float]; six decimal digits are
/// kept.
pub const FLOAT_SCALE: Int = 1_000_000;

impl Fraction {
    /// `n/1`.
    pub const fn from_integer(n: Int) -> Fraction {
        Fraction {
            numerator: n,
            denominator: 1,
        }
    }

    /// Approximates `value` by decimal-tolerance truncation.
    ///
    /// The integer part of `|value|` is kept exactly. If the remaining decimal part is below
    /// [FLOAT_TOLERANCE] the result is that whole number; otherwise the decimal part is truncated
    /// to six digits, as `digits / 1_000_000`, and added to the integer part. The sign of `value`
    /// is applied last.
    ///
    /// ```
    /// use libfraction::Fraction;
    ///
    /// assert_eq!(Fraction::from_float(1.5).to_string(), "3/2");
    /// assert_eq!(Fraction::from_float(-0.25).to_string(), "-1/4");
    /// assert_eq!(Fraction::from_float(2.0000001).to_string(), "2/1");
    /// ```
    ///
    /// ## Precision
    ///
    /// Digits past the sixth are truncated, not rounded, so `0.9999999` becomes
    /// `999999/1000000`. Magnitudes beyond [Int] saturate, and the addition of the two parts wraps
    /// like any other fraction arithmetic. `NaN` becomes `0/1`. This never fails.
    pub fn from_float(value: f64) -> Fraction {
        let sign: Int = if value > 0. {
            1
        } else if value < 0. {
            -1
        } else {
            0
        };
        let value = value.abs();

        let whole = value as Int;
        let decimal = value - whole as f64;

        if decimal.abs() < FLOAT_TOLERANCE {
            return Fraction::from_integer(sign.wrapping_mul(whole));
        }

        let digits = (decimal * FLOAT_SCALE as f64) as Int;
        let unsigned = Fraction::from_integer(whole).add(Fraction::normalize(digits, FLOAT_SCALE));

        // Only sound while both addends are non-negative: the sum's denominator is then already
        // positive, so the sign can go on the numerator alone.
        Fraction {
            numerator: unsigned.numerator.wrapping_mul(sign),
            denominator: unsigned.denominator,
        }
    }
}

impl From<Int> for Fraction {
    fn from(n: Int) -> Self {
        Fraction::from_integer(n)
    }
}

impl From<f64> for Fraction {
    fn from(value: f64) -> Self {
        Fraction::from_float(value)
    }
}
