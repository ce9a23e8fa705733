//! Validation utilities used at every algebra boundary

use super::{Error, Result};
use num_bigint::BigUint;

/// Validate a group parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, message));
    }
    Ok(())
}

/// Validate that a value is a potential element of its group
#[inline(always)]
pub fn element(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::element(context, message));
    }
    Ok(())
}

/// Validate a byte length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a scalar fits in `max_bits` bits
#[inline(always)]
pub fn scalar_bit_length(context: &'static str, scalar: &BigUint, max_bits: usize) -> Result<()> {
    let bits = scalar.bits() as usize;
    if bits > max_bits {
        return Err(Error::scalar(
            context,
            format!("scalar has {bits} bits, bound is {max_bits}"),
        ));
    }
    Ok(())
}

/// Validate that two operands come from the same group
#[inline(always)]
pub fn same_group(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::GroupMismatch { context });
    }
    Ok(())
}
