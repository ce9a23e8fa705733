//! Constant-time selection primitives
//!
//! The scalar multiplication engine and the curve addition formulas never
//! branch on secret data. Instead they compute every candidate result and
//! pick one with the helpers below, which blend values arithmetically under
//! a [`Choice`].
//!
//! `BigUint` arithmetic is not itself constant-time (limb counts vary with
//! magnitude), so these helpers remove secret-dependent control flow but
//! cannot hide operand sizes.

use num_bigint::BigUint;
use subtle::{Choice, ConstantTimeEq};

/// Constant-time equality of two byte slices, as a `Choice`
///
/// Slices of different length compare unequal without inspecting content.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Branch-free multiplex of two integers
///
/// Computes `when_zero * (1 - s) + when_one * s` for the selection bit `s`.
/// Both products are always evaluated.
pub fn ct_select_biguint(selection: Choice, when_zero: &BigUint, when_one: &BigUint) -> BigUint {
    let bit = BigUint::from(selection.unwrap_u8());
    let not_bit = BigUint::from((!selection).unwrap_u8());
    when_zero * not_bit + when_one * bit
}

/// Bit `index` of `value` as a `Choice`
#[inline]
pub fn bit_choice(value: &BigUint, index: usize) -> Choice {
    Choice::from(value.bit(index as u64) as u8)
}

/// Constant-time equality of two integers compared at a fixed width
///
/// Both values are encoded big-endian into `width` bytes before comparison,
/// so equal-width inputs of different magnitude take the same path. Values
/// wider than `width` compare unequal.
pub fn ct_eq_biguint(a: &BigUint, b: &BigUint, width: usize) -> Choice {
    match (
        crate::endian::biguint_to_be_padded(a, width),
        crate::endian::biguint_to_be_padded(b, width),
    ) {
        (Some(a), Some(b)) => ct_eq_choice(&a, &b),
        _ => Choice::from(0),
    }
}

/// Whether `value` is zero, as a `Choice`
pub fn ct_is_zero_biguint(value: &BigUint, width: usize) -> Choice {
    ct_eq_biguint(value, &BigUint::default(), width)
}
