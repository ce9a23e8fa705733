//! Generic constant-time scalar multiplication
//!
//! The engine needs nothing from a realization beyond its group law and its
//! branch-free multiplex. Every call performs exactly two `add` and one
//! `multiplex` per bit of the bound, whatever the scalar's value, so the
//! control flow never depends on the scalar. Whether the whole computation
//! is constant-time then rests on `add` and `multiplex` themselves.

use dgroup_api::BitLength;
use dgroup_internal::constant_time::bit_choice;
use num_bigint::BigUint;

use super::CryptoGroupAlgebra;

/// Left-to-right double-and-add over `factor_bit_length` bits of `scalar`
///
/// Bits of `scalar` at or above `factor_bit_length` are not read.
pub fn double_and_add<A>(
    algebra: &A,
    element: &A::Element,
    scalar: &BigUint,
    factor_bit_length: BitLength,
) -> A::Element
where
    A: CryptoGroupAlgebra + ?Sized,
{
    let mut accumulator = algebra.neutral_element().clone();
    for index in (0..factor_bit_length.bits()).rev() {
        let doubled = algebra.add(&accumulator, &accumulator);
        let added = algebra.add(&doubled, element);
        accumulator = algebra.multiplex(bit_choice(scalar, index), &doubled, &added);
    }
    accumulator
}
