//! Group handles binding elements to their algebra
//!
//! The raw algebra API trusts its caller to keep elements of different
//! groups apart. [`CryptoGroup`] and [`CryptoGroupElement`] share one
//! algebra through an [`Arc`] and check on every binary operation that both
//! operands come from the same group.

use std::sync::Arc;

use dgroup_api::{validate, BitLength, Error, Result};
use dgroup_common::CheckedPrime;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::algebra::CryptoGroupAlgebra;

mod element;

pub use element::CryptoGroupElement;

/// A cyclic group of prime order, shared by all of its elements
#[derive(Debug)]
pub struct CryptoGroup<A: CryptoGroupAlgebra> {
    algebra: Arc<A>,
}

impl<A: CryptoGroupAlgebra> Clone for CryptoGroup<A> {
    fn clone(&self) -> Self {
        Self {
            algebra: Arc::clone(&self.algebra),
        }
    }
}

impl<A: CryptoGroupAlgebra> PartialEq for CryptoGroup<A> {
    fn eq(&self, other: &Self) -> bool {
        same_algebra(&self.algebra, &other.algebra)
    }
}

impl<A: CryptoGroupAlgebra> Eq for CryptoGroup<A> {}

impl<A: CryptoGroupAlgebra> From<A> for CryptoGroup<A> {
    fn from(algebra: A) -> Self {
        Self::new(algebra)
    }
}

impl<A: CryptoGroupAlgebra> CryptoGroup<A> {
    /// Take ownership of an algebra
    pub fn new(algebra: A) -> Self {
        Self {
            algebra: Arc::new(algebra),
        }
    }

    /// Share an algebra that is already reference counted
    pub fn from_arc(algebra: Arc<A>) -> Self {
        Self { algebra }
    }

    /// The underlying algebra
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    /// The generator
    pub fn generator(&self) -> CryptoGroupElement<A> {
        self.wrap(self.algebra.generator().clone())
    }

    /// The neutral element
    pub fn neutral_element(&self) -> CryptoGroupElement<A> {
        self.wrap(self.algebra.neutral_element().clone())
    }

    /// Prime order of the group
    pub fn order(&self) -> &CheckedPrime {
        self.algebra.order()
    }

    pub fn order_bit_length(&self) -> BitLength {
        self.algebra.order_bit_length()
    }

    pub fn order_byte_length(&self) -> usize {
        self.order_bit_length().bytes()
    }

    pub fn element_bit_length(&self) -> BitLength {
        self.algebra.element_bit_length()
    }

    pub fn element_byte_length(&self) -> usize {
        self.element_bit_length().bytes()
    }

    /// Estimated security level in bits
    pub fn security_level(&self) -> usize {
        self.algebra.security_level()
    }

    /// Wrap a raw value, rejecting values outside the representation domain
    ///
    /// Only [`is_potential_element`](CryptoGroupAlgebra::is_potential_element)
    /// is checked, not subgroup membership.
    pub fn element(&self, value: A::Element) -> Result<CryptoGroupElement<A>> {
        validate::element(
            self.algebra.is_potential_element(&value),
            "CryptoGroup::element",
            "value is not a potential element of the group",
        )?;
        Ok(self.wrap(value))
    }

    /// Decode an element
    pub fn element_from_bytes(&self, bytes: &[u8]) -> Result<CryptoGroupElement<A>> {
        let value = self.algebra.from_bytes(bytes)?;
        Ok(self.wrap(value))
    }

    /// `scalar * generator`, with the scalar reduced modulo the order
    pub fn generate(&self, scalar: &BigUint) -> CryptoGroupElement<A> {
        self.wrap(self.algebra.generate_element(scalar))
    }

    /// Draw a uniform scalar in `[1, order - 1]` and return it with `scalar * generator`
    ///
    /// Candidates of the order's bit length are drawn from `rng` and
    /// rejected until one falls in range; fewer than two draws are needed
    /// on average.
    ///
    /// # Errors
    ///
    /// [`Error::RandomGeneration`] if `rng` fails.
    pub fn generate_random<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(BigUint, CryptoGroupElement<A>)> {
        let scalar = random_scalar(self.order(), rng)?;
        let element = self.generate(&scalar);
        Ok((scalar, element))
    }

    /// Sum of two elements of this group
    pub fn add(
        &self,
        left: &CryptoGroupElement<A>,
        right: &CryptoGroupElement<A>,
    ) -> Result<CryptoGroupElement<A>> {
        self.check_member(left, "CryptoGroup::add")?;
        left.try_add(right)
    }

    /// `scalar * element` for an element of this group
    pub fn multiply_scalar(
        &self,
        element: &CryptoGroupElement<A>,
        scalar: &BigUint,
    ) -> Result<CryptoGroupElement<A>> {
        self.check_member(element, "CryptoGroup::multiply_scalar")?;
        Ok(element.multiply_scalar(scalar))
    }

    /// Inverse of an element of this group
    pub fn negate(&self, element: &CryptoGroupElement<A>) -> Result<CryptoGroupElement<A>> {
        self.check_member(element, "CryptoGroup::negate")?;
        Ok(element.negate())
    }

    /// Whether `element` belongs to this group
    pub fn contains(&self, element: &CryptoGroupElement<A>) -> bool {
        same_algebra(&self.algebra, element.algebra_arc())
    }

    fn check_member(&self, element: &CryptoGroupElement<A>, context: &'static str) -> Result<()> {
        validate::same_group(self.contains(element), context)
    }

    fn wrap(&self, value: A::Element) -> CryptoGroupElement<A> {
        CryptoGroupElement::new_unchecked(Arc::clone(&self.algebra), value)
    }
}

/// Two handles name the same group if they share an algebra or have equal parameters
pub(crate) fn same_algebra<A: CryptoGroupAlgebra>(left: &Arc<A>, right: &Arc<A>) -> bool {
    Arc::ptr_eq(left, right) || **left == **right
}

/// Rejection-sample a scalar in `[1, order - 1]`
fn random_scalar<R: RngCore + CryptoRng>(order: &CheckedPrime, rng: &mut R) -> Result<BigUint> {
    let bit_length = BitLength::of(order);
    let mut buffer = Zeroizing::new(vec![0u8; bit_length.bytes()]);
    // clears the excess high bits of the leading byte
    let excess = 8 * bit_length.bytes() - bit_length.bits();
    let mask = 0xffu8 >> excess;

    let mut rounds = 0usize;
    loop {
        rounds += 1;
        rng.try_fill_bytes(&mut buffer)
            .map_err(|e| Error::RandomGeneration {
                context: "CryptoGroup::generate_random",
                message: e.to_string(),
            })?;
        buffer[0] &= mask;
        let candidate = BigUint::from_bytes_be(&buffer);
        if candidate.bits() > 0 && candidate < *order.as_biguint() {
            tracing::trace!(rounds, "sampled random scalar");
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests;
