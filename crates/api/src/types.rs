//! Length types shared by every group realization

use core::fmt;
use core::ops::{Add, Mul};
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A length measured in bits
///
/// Loop bounds of the scalar multiplication engine and buffer sizes of the
/// element codecs are both derived from this type. The byte length is
/// always `ceil(bits / 8)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitLength(usize);

impl BitLength {
    /// The empty length
    pub const ZERO: Self = Self(0);

    /// Create a length from a number of bits
    pub const fn from_bits(bits: usize) -> Self {
        Self(bits)
    }

    /// Create a length from a number of bytes
    pub const fn from_bytes(bytes: usize) -> Self {
        Self(bytes * 8)
    }

    /// The number of bits needed to represent `value`
    ///
    /// Zero has a bit length of zero.
    pub fn of(value: &BigUint) -> Self {
        Self(value.bits() as usize)
    }

    /// Length in bits
    pub const fn bits(self) -> usize {
        self.0
    }

    /// Length in bytes, rounded up
    pub const fn bytes(self) -> usize {
        self.0.div_ceil(8)
    }
}

impl Add for BitLength {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<usize> for BitLength {
    type Output = Self;

    fn mul(self, rhs: usize) -> Self {
        Self(self.0 * rhs)
    }
}

impl From<usize> for BitLength {
    fn from(bits: usize) -> Self {
        Self(bits)
    }
}

impl fmt::Display for BitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}
