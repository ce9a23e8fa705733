//! The group algebra contract
//!
//! [`CryptoGroupAlgebra`] is the interface every concrete group realization
//! implements. A realization supplies the primitive group law ([`add`]), a
//! branch-free selection ([`multiplex`]), the validity predicate for its raw
//! representation and a byte codec. Scalar multiplication, negation,
//! element generation and the small-subgroup check are provided on top of
//! those primitives by the [`engine`], and realizations may override them
//! with cheaper closed forms that give identical results.
//!
//! [`add`]: CryptoGroupAlgebra::add
//! [`multiplex`]: CryptoGroupAlgebra::multiplex

use core::fmt;

use dgroup_api::{validate, BitLength, Result};
use dgroup_common::CheckedPrime;
use num_bigint::BigUint;
use subtle::Choice;

pub mod engine;

/// Operations on the raw elements of one cyclic group
///
/// Implementations are immutable once constructed and must be safe to
/// share across threads; every operation returns a fresh element.
///
/// Elements handled here are not self-validating. Values from untrusted
/// sources go through [`is_potential_element`](Self::is_potential_element)
/// or [`from_bytes`](Self::from_bytes) first, which the
/// [`CryptoGroup`](crate::group::CryptoGroup) wrapper does for you.
pub trait CryptoGroupAlgebra: fmt::Debug + PartialEq + Send + Sync {
    /// Raw element representation
    type Element: Clone + PartialEq + Eq + fmt::Debug + Send + Sync;

    /// Prime order of the group spanned by the generator
    fn order(&self) -> &CheckedPrime;

    /// The generator
    fn generator(&self) -> &Self::Element;

    /// The identity element
    fn neutral_element(&self) -> &Self::Element;

    /// Ratio between the size of the underlying structure and [`order`](Self::order)
    fn cofactor(&self) -> &BigUint;

    /// Bit length of an encoded element
    fn element_bit_length(&self) -> BitLength;

    /// Bit length of the group order
    fn order_bit_length(&self) -> BitLength {
        BitLength::of(self.order())
    }

    /// Estimated security level in bits
    ///
    /// Generic attacks on a group of prime order `q` cost about `sqrt(q)`
    /// operations, hence half the order's bit length. Realizations with a
    /// cheaper structural attack report less.
    fn security_level(&self) -> usize {
        self.order_bit_length().bits() / 2
    }

    /// The group law
    fn add(&self, left: &Self::Element, right: &Self::Element) -> Self::Element;

    /// Branch-free selection: `left` when `selection` is 0, `right` when 1
    ///
    /// Must not branch on `selection`; the scalar multiplication engine
    /// feeds secret scalar bits through it.
    fn multiplex(&self, selection: Choice, left: &Self::Element, right: &Self::Element)
        -> Self::Element;

    /// Whether `element` lies in the raw representation domain
    fn is_potential_element(&self, element: &Self::Element) -> bool;

    /// Fixed-length byte encoding of `element`
    fn to_bytes(&self, element: &Self::Element) -> Vec<u8>;

    /// Decode an element, rejecting buffers that are not potential elements
    fn from_bytes(&self, bytes: &[u8]) -> Result<Self::Element>;

    /// `scalar * element`, iterating over exactly `factor_bit_length` bits
    ///
    /// The caller guarantees `scalar` fits in `factor_bit_length` bits;
    /// excess high bits are ignored. Use
    /// [`multiply_scalar_with_bit_length`](Self::multiply_scalar_with_bit_length)
    /// for a checked entry point.
    fn multiply_scalar_unchecked(
        &self,
        element: &Self::Element,
        scalar: &BigUint,
        factor_bit_length: BitLength,
    ) -> Self::Element {
        engine::double_and_add(self, element, scalar, factor_bit_length)
    }

    /// `scalar * element` for a scalar known to fit in `factor_bit_length` bits
    ///
    /// The cost depends only on `factor_bit_length`. Callers multiplying
    /// secret scalars of one class must keep that bound fixed across calls,
    /// or the bound itself leaks the scalar's magnitude.
    fn multiply_scalar_with_bit_length(
        &self,
        element: &Self::Element,
        scalar: &BigUint,
        factor_bit_length: BitLength,
    ) -> Result<Self::Element> {
        validate::scalar_bit_length(
            "CryptoGroupAlgebra::multiply_scalar",
            scalar,
            factor_bit_length.bits(),
        )?;
        Ok(self.multiply_scalar_unchecked(element, scalar, factor_bit_length))
    }

    /// `scalar * element`, with the scalar reduced modulo the group order
    fn multiply_scalar(&self, element: &Self::Element, scalar: &BigUint) -> Self::Element {
        let reduced = scalar % self.order().as_biguint();
        self.multiply_scalar_unchecked(element, &reduced, self.order_bit_length())
    }

    /// The inverse of `element`, computed as `(order - 1) * element`
    fn negate(&self, element: &Self::Element) -> Self::Element {
        let exponent = self.order().as_biguint() - 1u8;
        self.multiply_scalar(element, &exponent)
    }

    /// `scalar * generator`
    fn generate_element(&self, scalar: &BigUint) -> Self::Element {
        self.multiply_scalar(self.generator(), scalar)
    }

    /// Whether `element` is a potential element outside the small subgroups
    ///
    /// An element is safe iff multiplying it by the cofactor does not give
    /// the neutral element. The neutral element itself is therefore never
    /// safe.
    fn is_safe_element(&self, element: &Self::Element) -> bool {
        if !self.is_potential_element(element) {
            return false;
        }
        let cofactor = self.cofactor();
        let check = self.multiply_scalar_unchecked(element, cofactor, BitLength::of(cofactor));
        check != *self.neutral_element()
    }
}
