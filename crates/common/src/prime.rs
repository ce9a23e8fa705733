//! Integers known to be prime

use core::fmt;
use core::ops::Deref;

use dgroup_api::{Error, Result};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use crate::math_common::is_probable_prime;

/// An arbitrary-precision integer that passed a primality test
///
/// The only ways to obtain one are the checked constructors, which run
/// Miller-Rabin, and [`CheckedPrime::new_unchecked`] for published
/// constants that were verified elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckedPrime(BigUint);

impl CheckedPrime {
    /// Miller-Rabin rounds used by the checked constructors
    pub const MILLER_RABIN_ROUNDS: usize = 64;

    /// Check `value` for primality with bases drawn from the OS RNG
    #[cfg(feature = "std")]
    pub fn new(value: BigUint) -> Result<Self> {
        Self::new_with_rng(value, &mut rand::rngs::OsRng)
    }

    /// Check `value` for primality with bases drawn from `rng`
    pub fn new_with_rng<R: RngCore + CryptoRng>(value: BigUint, rng: &mut R) -> Result<Self> {
        if !is_probable_prime(&value, Self::MILLER_RABIN_ROUNDS, rng) {
            return Err(Error::param("CheckedPrime", "value is not prime"));
        }
        Ok(Self(value))
    }

    /// Wrap a value the caller asserts is prime
    ///
    /// Intended for published parameters such as curve field primes. No
    /// check is performed; a composite passed here silently breaks every
    /// invariant downstream.
    pub fn new_unchecked(value: BigUint) -> Self {
        Self(value)
    }

    /// Borrow the underlying integer
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Unwrap into the underlying integer
    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

impl Deref for CheckedPrime {
    type Target = BigUint;

    fn deref(&self) -> &BigUint {
        &self.0
    }
}

impl AsRef<BigUint> for CheckedPrime {
    fn as_ref(&self) -> &BigUint {
        &self.0
    }
}

impl From<CheckedPrime> for BigUint {
    fn from(prime: CheckedPrime) -> Self {
        prime.0
    }
}

impl fmt::Display for CheckedPrime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
