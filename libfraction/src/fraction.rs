use crate::errors::FractionError;
use crate::math::gcd;
use crate::utils::xor_hash;

use std::fmt;
use std::hash::{Hash, Hasher};

mod arith;
mod convert;
pub use convert::{FLOAT_SCALE, FLOAT_TOLERANCE};

/// The fixed-width integer type of a fraction's numerator and denominator.
pub type Int = i64;

/// A rational number `numerator / denominator` in canonical form.
///
/// Every `Fraction` satisfies, from construction on:
///
/// - the denominator is positive, so any sign lives in the numerator;
/// - the numerator and denominator are coprime, with zero represented as `0/1`.
///
/// Because the form is canonical, equality and hashing are structural: `2/4` cannot exist
/// alongside `1/2`.
///
/// A `Fraction` is never mutated after it is built. Every operation produces a new value that
/// passes back through the same normalization as [Fraction::new].
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Fraction {
    numerator: Int,
    denominator: Int,
}

impl Fraction {
    /// `0/1`.
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    /// `1/1`.
    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Creates the fraction `numerator / denominator`, reduced to lowest terms with a positive
    /// denominator.
    ///
    /// ```
    /// use libfraction::{Fraction, FractionError};
    ///
    /// assert_eq!(Fraction::new(2, 4)?.to_string(), "1/2");
    /// assert_eq!(Fraction::new(3, -4)?.to_string(), "-3/4");
    /// assert_eq!(Fraction::new(0, -7)?, Fraction::ZERO);
    /// assert_eq!(Fraction::new(1, 0), Err(FractionError::InvalidArgument));
    /// # Ok::<(), FractionError>(())
    /// ```
    ///
    /// ## Failure
    ///
    /// Fails with [InvalidArgument](FractionError::InvalidArgument) if `denominator` is zero.
    pub fn new(numerator: Int, denominator: Int) -> Result<Fraction, FractionError> {
        if denominator == 0 {
            return Err(FractionError::InvalidArgument);
        }
        Ok(Self::normalize(numerator, denominator))
    }

    /// Normalizes a pair with a non-zero `denominator`.
    ///
    /// The one pair family that has no canonical form in [Int] is an odd numerator over
    /// `Int::MIN`; its sign flip wraps, like the rest of fraction arithmetic.
    pub(crate) fn normalize(numerator: Int, denominator: Int) -> Fraction {
        let (numerator, denominator) = reduce(numerator, denominator);
        if denominator < 0 {
            Fraction {
                numerator: numerator.wrapping_neg(),
                denominator: denominator.wrapping_neg(),
            }
        } else {
            Fraction {
                numerator,
                denominator,
            }
        }
    }

    /// [normalize](Fraction::normalize), but [None](Option::None) where the sign flip would
    /// overflow or the denominator is zero.
    pub(crate) fn checked_normalize(numerator: Int, denominator: Int) -> Option<Fraction> {
        if denominator == 0 {
            return None;
        }
        let (numerator, denominator) = reduce(numerator, denominator);
        if denominator < 0 {
            Some(Fraction {
                numerator: numerator.checked_neg()?,
                denominator: denominator.checked_neg()?,
            })
        } else {
            Some(Fraction {
                numerator,
                denominator,
            })
        }
    }

    /// The canonical numerator. Carries the fraction's sign.
    pub const fn numerator(&self) -> Int {
        self.numerator
    }

    /// The canonical denominator. Always positive.
    pub const fn denominator(&self) -> Int {
        self.denominator
    }

    /// Whether this is the zero fraction, `0/1`.
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// True iff `numerator < denominator`.
    ///
    /// This is a comparison of the two canonical fields, not a test of the fraction's value:
    /// `1/2` is true, `5/2` is false, `2/2` (stored as `1/1`) is false, and every negative
    /// fraction is true, `-5/2` included.
    pub const fn is_numerator_less_than_denominator(&self) -> bool {
        self.numerator < self.denominator
    }

    /// The nearest `f64` to `numerator / denominator`.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Divides `numerator` and `denominator` by their GCD. `denominator` must be non-zero.
fn reduce(numerator: Int, denominator: Int) -> (Int, Int) {
    // The GCD exceeds `Int::MAX` only when each operand is 0 or `Int::MIN`. It then reads back as
    // `Int::MIN`, which still divides both operands exactly.
    let g = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as Int;
    (numerator / g, denominator / g)
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(xor_hash(&[self.numerator, self.denominator]));
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({})", self)
    }
}
