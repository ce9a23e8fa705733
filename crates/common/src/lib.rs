//! Common arithmetic for the dgroup library
//!
//! Numeric building blocks shared by the multiplicative and elliptic-curve
//! realizations: a prime wrapper that can only be built from a value that
//! passed a primality test, probabilistic primality and modular square
//! roots, and arithmetic in a prime field.

#![forbid(unsafe_code)]

pub mod field;
pub mod math_common;
pub mod prime;

pub use field::PrimeField;
pub use prime::CheckedPrime;
