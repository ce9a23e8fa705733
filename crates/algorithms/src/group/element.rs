//! Elements bound to their group

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use dgroup_api::{validate, BitLength, Result};
use num_bigint::BigUint;

use super::{same_algebra, CryptoGroup};
use crate::algebra::CryptoGroupAlgebra;

/// An element together with the algebra of the group it belongs to
///
/// Binary operations check that both operands belong to the same group.
/// The `try_` methods report a mismatch as
/// [`Error::GroupMismatch`](dgroup_api::Error::GroupMismatch); the operator
/// impls panic instead.
#[derive(Debug)]
pub struct CryptoGroupElement<A: CryptoGroupAlgebra> {
    algebra: Arc<A>,
    value: A::Element,
}

impl<A: CryptoGroupAlgebra> Clone for CryptoGroupElement<A> {
    fn clone(&self) -> Self {
        Self {
            algebra: Arc::clone(&self.algebra),
            value: self.value.clone(),
        }
    }
}

impl<A: CryptoGroupAlgebra> CryptoGroupElement<A> {
    pub(crate) fn new_unchecked(algebra: Arc<A>, value: A::Element) -> Self {
        Self { algebra, value }
    }

    /// The raw element
    pub fn value(&self) -> &A::Element {
        &self.value
    }

    /// Unwrap into the raw element
    pub fn into_value(self) -> A::Element {
        self.value
    }

    /// The algebra of the group this element belongs to
    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    /// A handle to the group this element belongs to
    pub fn group(&self) -> CryptoGroup<A> {
        CryptoGroup::from_arc(Arc::clone(&self.algebra))
    }

    pub(crate) fn algebra_arc(&self) -> &Arc<A> {
        &self.algebra
    }

    /// Whether both elements belong to the same group
    pub fn is_same_group(&self, other: &Self) -> bool {
        same_algebra(&self.algebra, &other.algebra)
    }

    /// The group sum
    ///
    /// # Errors
    ///
    /// [`Error::GroupMismatch`](dgroup_api::Error::GroupMismatch) if `other`
    /// belongs to a different group.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        validate::same_group(self.is_same_group(other), "CryptoGroupElement::add")?;
        Ok(self.with_value(self.algebra.add(&self.value, &other.value)))
    }

    /// `self + (-other)`
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        validate::same_group(self.is_same_group(other), "CryptoGroupElement::sub")?;
        let negated = self.algebra.negate(&other.value);
        Ok(self.with_value(self.algebra.add(&self.value, &negated)))
    }

    /// `scalar * self`, with the scalar reduced modulo the group order
    pub fn multiply_scalar(&self, scalar: &BigUint) -> Self {
        self.with_value(self.algebra.multiply_scalar(&self.value, scalar))
    }

    /// `scalar * self` iterating over exactly `factor_bit_length` bits
    ///
    /// # Errors
    ///
    /// [`Error::InvalidScalar`](dgroup_api::Error::InvalidScalar) if
    /// `scalar` does not fit in `factor_bit_length` bits.
    pub fn multiply_scalar_with_bit_length(
        &self,
        scalar: &BigUint,
        factor_bit_length: BitLength,
    ) -> Result<Self> {
        let value =
            self.algebra
                .multiply_scalar_with_bit_length(&self.value, scalar, factor_bit_length)?;
        Ok(self.with_value(value))
    }

    /// The group inverse
    pub fn negate(&self) -> Self {
        self.with_value(self.algebra.negate(&self.value))
    }

    /// Whether this is the neutral element
    pub fn is_neutral(&self) -> bool {
        self.value == *self.algebra.neutral_element()
    }

    /// Whether this element is outside the small subgroups
    pub fn is_safe(&self) -> bool {
        self.algebra.is_safe_element(&self.value)
    }

    /// Encode with the algebra's codec
    pub fn to_bytes(&self) -> Vec<u8> {
        self.algebra.to_bytes(&self.value)
    }

    fn with_value(&self, value: A::Element) -> Self {
        Self {
            algebra: Arc::clone(&self.algebra),
            value,
        }
    }
}

impl<A: CryptoGroupAlgebra> PartialEq for CryptoGroupElement<A> {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_group(other) && self.value == other.value
    }
}

impl<A: CryptoGroupAlgebra> Eq for CryptoGroupElement<A> {}

impl<A: CryptoGroupAlgebra> fmt::Display for CryptoGroupElement<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

/// # Panics
///
/// If the operands belong to different groups; use
/// [`CryptoGroupElement::try_add`] to handle that case.
impl<A: CryptoGroupAlgebra> Add for &CryptoGroupElement<A> {
    type Output = CryptoGroupElement<A>;

    fn add(self, other: Self) -> Self::Output {
        match self.try_add(other) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

/// # Panics
///
/// If the operands belong to different groups; use
/// [`CryptoGroupElement::try_sub`] to handle that case.
impl<A: CryptoGroupAlgebra> Sub for &CryptoGroupElement<A> {
    type Output = CryptoGroupElement<A>;

    fn sub(self, other: Self) -> Self::Output {
        match self.try_sub(other) {
            Ok(difference) => difference,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<A: CryptoGroupAlgebra> Neg for &CryptoGroupElement<A> {
    type Output = CryptoGroupElement<A>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<A: CryptoGroupAlgebra> Mul<&BigUint> for &CryptoGroupElement<A> {
    type Output = CryptoGroupElement<A>;

    fn mul(self, scalar: &BigUint) -> Self::Output {
        self.multiply_scalar(scalar)
    }
}
