//! Integer algorithms used by [Fraction](crate::Fraction) normalization.
//!
//! `math` works on unsigned magnitudes only; sign handling is the caller's business.

mod gcd;
pub use gcd::*;
