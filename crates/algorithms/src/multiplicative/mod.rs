//! Prime-field multiplicative groups
//!
//! Elements are integers in `(0, p)` and the group law is multiplication
//! modulo the prime `p`. The cryptographically used group is the subgroup
//! of prime order `q` generated by `g`, with cofactor `(p - 1) / q`.
//!
//! Scalar multiplication is modular exponentiation, so "`k * e`" in the
//! algebra contract reads as `e^k mod p` here.

use dgroup_api::{validate, BitLength, Error, Result};
use dgroup_common::{CheckedPrime, PrimeField};
use dgroup_internal::endian::{biguint_from_be, biguint_to_be_padded};
use dgroup_params::traditional::dh::ModpGroupConstants;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use subtle::Choice;

use crate::algebra::CryptoGroupAlgebra;
use crate::group::CryptoGroup;

mod security;

pub use security::{estimate_nfs_security_level, prime_bit_length_for_security_level};

/// Algebra of the order-`q` subgroup of the integers modulo a prime `p`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicativeGroupAlgebra {
    field: PrimeField,
    order: CheckedPrime,
    generator: BigUint,
    cofactor: BigUint,
    neutral_element: BigUint,
    order_bit_length: BitLength,
    security_level: usize,
}

impl MultiplicativeGroupAlgebra {
    /// Create the algebra from a prime modulus, a prime order and a generator
    ///
    /// Fails if `order` does not divide `prime - 1` or if `generator` is not
    /// a safe element of the resulting group.
    pub fn new(prime: CheckedPrime, order: CheckedPrime, generator: BigUint) -> Result<Self> {
        let p_minus_one = prime.as_biguint() - 1u8;
        if !(&p_minus_one % order.as_biguint()).is_zero() {
            tracing::warn!(
                modulus_bits = BitLength::of(&prime).bits(),
                "rejected multiplicative group: order does not divide p - 1"
            );
            return Err(Error::param(
                "MultiplicativeGroupAlgebra",
                "order does not divide p - 1",
            ));
        }
        let cofactor = &p_minus_one / order.as_biguint();
        let order_bit_length = BitLength::of(&order);
        let field = PrimeField::new(prime);
        let security_level = (order_bit_length.bits() / 2)
            .min(estimate_nfs_security_level(field.element_bit_length()));

        let algebra = Self {
            field,
            order,
            generator,
            cofactor,
            neutral_element: BigUint::one(),
            order_bit_length,
            security_level,
        };
        if !algebra.is_safe_element(&algebra.generator) {
            tracing::warn!(
                modulus_bits = algebra.field.element_bit_length().bits(),
                "rejected multiplicative group: generator is not a safe element"
            );
            return Err(Error::param(
                "MultiplicativeGroupAlgebra",
                "generator is not a safe element",
            ));
        }
        tracing::debug!(
            modulus_bits = algebra.field.element_bit_length().bits(),
            order_bits = algebra.order_bit_length.bits(),
            security_level = algebra.security_level,
            "created multiplicative group algebra"
        );
        Ok(algebra)
    }

    /// Like [`new`](Self::new), but first checks that `prime` and `order` are prime
    pub fn new_checked<R: RngCore + CryptoRng>(
        prime: BigUint,
        order: BigUint,
        generator: BigUint,
        rng: &mut R,
    ) -> Result<Self> {
        let prime = CheckedPrime::new_with_rng(prime, rng)
            .map_err(|e| e.with_context("MultiplicativeGroupAlgebra modulus"))?;
        let order = CheckedPrime::new_with_rng(order, rng)
            .map_err(|e| e.with_context("MultiplicativeGroupAlgebra order"))?;
        Self::new(prime, order, generator)
    }

    /// Create the algebra from published constants, trusting their primality
    pub fn from_constants(constants: &ModpGroupConstants) -> Result<Self> {
        let prime = parse_hex(constants.p, "modulus")?;
        let order = parse_hex(constants.q, "order")?;
        let generator = parse_hex(constants.g, "generator")?;
        Self::new(
            CheckedPrime::new_unchecked(prime),
            CheckedPrime::new_unchecked(order),
            generator,
        )
    }

    /// The RFC 3526 2048-bit MODP group
    pub fn rfc3526_2048() -> Result<Self> {
        Self::from_constants(&dgroup_params::traditional::dh::RFC3526_MODP_2048)
    }

    /// Generate a fresh group modulo a safe prime `p = 2q + 1`
    ///
    /// `p` has exactly `prime_bit_length` bits and `q` is prime; the
    /// generator is the square of a random element, which places it in the
    /// order-`q` subgroup of quadratic residues. Expect this to take a while
    /// for cryptographic sizes.
    pub fn generate<R: RngCore + CryptoRng>(prime_bit_length: BitLength, rng: &mut R) -> Result<Self> {
        validate::parameter(
            prime_bit_length.bits() >= 4,
            "MultiplicativeGroupAlgebra::generate",
            "prime bit length must be at least 4",
        )?;
        let (prime, order) = generate_safe_prime(prime_bit_length, rng);
        let p_minus_one = prime.as_biguint() - 1u8;
        loop {
            let h = rng.gen_biguint_range(&BigUint::from(2u8), &p_minus_one);
            let generator = (&h * &h) % prime.as_biguint();
            if !generator.is_one() {
                return Self::new(prime, order, generator);
            }
        }
    }

    /// Generate a fresh safe-prime group for a target security level in bits
    pub fn generate_for_security_level<R: RngCore + CryptoRng>(
        security_level: usize,
        rng: &mut R,
    ) -> Result<Self> {
        Self::generate(prime_bit_length_for_security_level(security_level), rng)
    }

    /// Wrap a new algebra in a [`CryptoGroup`]
    pub fn create_crypto_group(
        prime: CheckedPrime,
        order: CheckedPrime,
        generator: BigUint,
    ) -> Result<CryptoGroup<Self>> {
        Ok(CryptoGroup::new(Self::new(prime, order, generator)?))
    }

    /// The prime modulus `p`
    pub fn prime(&self) -> &CheckedPrime {
        self.field.modulus()
    }

    /// The field of integers modulo `p`
    pub fn field(&self) -> &PrimeField {
        &self.field
    }
}

impl CryptoGroupAlgebra for MultiplicativeGroupAlgebra {
    type Element = BigUint;

    fn order(&self) -> &CheckedPrime {
        &self.order
    }

    fn generator(&self) -> &BigUint {
        &self.generator
    }

    fn neutral_element(&self) -> &BigUint {
        &self.neutral_element
    }

    fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    fn element_bit_length(&self) -> BitLength {
        self.field.element_bit_length()
    }

    fn order_bit_length(&self) -> BitLength {
        self.order_bit_length
    }

    fn security_level(&self) -> usize {
        self.security_level
    }

    fn add(&self, left: &BigUint, right: &BigUint) -> BigUint {
        self.field.mul(left, right)
    }

    fn multiplex(&self, selection: Choice, left: &BigUint, right: &BigUint) -> BigUint {
        self.field.multiplex(selection, left, right)
    }

    fn is_potential_element(&self, element: &BigUint) -> bool {
        !element.is_zero() && self.field.contains(element)
    }

    fn to_bytes(&self, element: &BigUint) -> Vec<u8> {
        let width = self.element_bit_length().bytes();
        // elements are below p and always fit
        biguint_to_be_padded(element, width).unwrap_or_else(|| vec![0u8; width])
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<BigUint> {
        validate::length(
            "MultiplicativeGroupAlgebra::from_bytes",
            bytes.len(),
            self.element_bit_length().bytes(),
        )?;
        let element = biguint_from_be(bytes);
        validate::element(
            self.is_potential_element(&element),
            "MultiplicativeGroupAlgebra::from_bytes",
            "value is not in (0, p)",
        )?;
        Ok(element)
    }

    fn multiply_scalar_unchecked(
        &self,
        element: &BigUint,
        scalar: &BigUint,
        _factor_bit_length: BitLength,
    ) -> BigUint {
        self.field.pow(element, scalar)
    }

    fn negate(&self, element: &BigUint) -> BigUint {
        self.field.invert(element)
    }
}

fn parse_hex(value: &str, what: &'static str) -> Result<BigUint> {
    BigUint::parse_bytes(value.as_bytes(), 16)
        .ok_or_else(|| Error::param("ModpGroupConstants", format!("malformed {what}")))
}

/// Draw primes `q` and `p = 2q + 1` with `p` of exactly `bit_length` bits
fn generate_safe_prime<R: RngCore + CryptoRng>(
    bit_length: BitLength,
    rng: &mut R,
) -> (CheckedPrime, CheckedPrime) {
    let q_bits = bit_length.bits() - 1;
    let top = BigUint::one() << (q_bits - 1);
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let mut q = rng.gen_biguint((q_bits - 1) as u64) | &top;
        q |= BigUint::one();
        let Ok(order) = CheckedPrime::new_with_rng(q, rng) else {
            continue;
        };
        let p = (order.as_biguint() << 1u8) + 1u8;
        if let Ok(prime) = CheckedPrime::new_with_rng(p, rng) {
            tracing::trace!(attempts, bits = bit_length.bits(), "found safe prime");
            return (prime, order);
        }
    }
}
