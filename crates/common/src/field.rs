//! Arithmetic in a prime field F_p over arbitrary-precision integers
//!
//! All operations take and return canonical representatives in `[0, p)`.
//! Inputs outside that range are reduced first, so the curve formulas can
//! feed intermediate values straight back in.

use dgroup_api::BitLength;
use dgroup_internal::constant_time::{ct_eq_biguint, ct_is_zero_biguint, ct_select_biguint};
use num_bigint::BigUint;
use subtle::Choice;

use crate::math_common::sqrt_mod;
use crate::prime::CheckedPrime;

/// The prime field of integers modulo a prime `p`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: CheckedPrime,
    inversion_exponent: BigUint,
    element_bit_length: BitLength,
}

impl PrimeField {
    /// Create the field of integers modulo `modulus`
    pub fn new(modulus: CheckedPrime) -> Self {
        let inversion_exponent = modulus.as_biguint() - 2u8;
        let element_bit_length = BitLength::of(&modulus);
        Self {
            modulus,
            inversion_exponent,
            element_bit_length,
        }
    }

    /// The field prime `p`
    pub fn modulus(&self) -> &CheckedPrime {
        &self.modulus
    }

    /// Bit length of `p`
    pub fn element_bit_length(&self) -> BitLength {
        self.element_bit_length
    }

    /// Bytes needed to encode one field element
    pub fn element_byte_length(&self) -> usize {
        self.element_bit_length.bytes()
    }

    /// Whether `x` is a canonical representative, i.e. `x < p`
    pub fn contains(&self, x: &BigUint) -> bool {
        x < self.modulus.as_biguint()
    }

    /// Reduce `x` modulo `p`
    pub fn reduce(&self, x: &BigUint) -> BigUint {
        x % self.modulus.as_biguint()
    }

    /// `a + b mod p`
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % self.modulus.as_biguint()
    }

    /// `a - b mod p`
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let p = self.modulus.as_biguint();
        (a % p + p - b % p) % p
    }

    /// `-a mod p`
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let p = self.modulus.as_biguint();
        (p - a % p) % p
    }

    /// `a * b mod p`
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % self.modulus.as_biguint()
    }

    /// `a^2 mod p`
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// `base^exponent mod p`
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, self.modulus.as_biguint())
    }

    /// Multiplicative inverse via Fermat, `a^(p-2) mod p`
    ///
    /// Zero maps to zero instead of failing, so formulas that divide by a
    /// value which is zero for some degenerate input keep a uniform cost.
    /// The result for such an input is then discarded by a multiplex.
    pub fn invert(&self, a: &BigUint) -> BigUint {
        self.pow(a, &self.inversion_exponent)
    }

    /// A square root of `a`, if one exists
    pub fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        sqrt_mod(a, self.modulus.as_biguint())
    }

    /// Branch-free `left * (1 - s) + right * s` for selection bit `s`
    pub fn multiplex(&self, selection: Choice, left: &BigUint, right: &BigUint) -> BigUint {
        ct_select_biguint(selection, &self.reduce(left), &self.reduce(right))
    }

    /// Constant-width equality of two field elements
    pub fn ct_eq(&self, a: &BigUint, b: &BigUint) -> Choice {
        ct_eq_biguint(&self.reduce(a), &self.reduce(b), self.element_byte_length())
    }

    /// Whether `a = 0 mod p`
    pub fn ct_is_zero(&self, a: &BigUint) -> Choice {
        ct_is_zero_biguint(&self.reduce(a), self.element_byte_length())
    }

    /// Select between two choices without branching
    pub fn select_choice(&self, selection: Choice, when_zero: Choice, when_one: Choice) -> Choice {
        (when_zero & !selection) | (when_one & selection)
    }
}
