//! Exact rational arithmetic.
//!
//! The single value type of this crate is [Fraction](crate::Fraction), a numerator/denominator
//! pair kept in lowest terms with the sign on the numerator:
//!
//! ```
//! use libfraction::Fraction;
//!
//! let f = Fraction::new(3, 4)?;
//! assert_eq!((f * 10).to_string(), "15/2");
//! assert_eq!((10 * f).to_string(), "15/2");
//! assert_eq!((f + 1.5).to_string(), "9/4");
//! # Ok::<(), libfraction::FractionError>(())
//! ```
//!
//! Numerators and denominators are fixed-width [Int](crate::Int)s. Arithmetic wraps on overflow
//! rather than reporting it; the `checked_*` family of operations returns [None](Option::None)
//! instead for callers that need to detect it.

pub mod errors;
pub use errors::FractionError;

mod fraction;
pub use fraction::{Fraction, Int, FLOAT_SCALE, FLOAT_TOLERANCE};

mod math;

#[cfg(feature = "benchmark-internals")]
pub use math::*;

mod utils;
