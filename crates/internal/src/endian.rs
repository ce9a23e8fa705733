//! Fixed-width big-endian integer encoding

use num_bigint::BigUint;
use num_traits::Zero;

/// Encode `value` big-endian, left-padded with zeros to exactly `width` bytes
///
/// Returns `None` when `value` does not fit in `width` bytes.
pub fn biguint_to_be_padded(value: &BigUint, width: usize) -> Option<Vec<u8>> {
    if value.is_zero() {
        return Some(vec![0u8; width]);
    }
    let raw = value.to_bytes_be();
    if raw.len() > width {
        return None;
    }
    let mut out = vec![0u8; width];
    out[width - raw.len()..].copy_from_slice(&raw);
    Some(out)
}

/// Write `value` big-endian into `out`, left-padded with zeros
///
/// Returns `false` and leaves `out` zeroed when `value` does not fit.
pub fn write_biguint_be(value: &BigUint, out: &mut [u8]) -> bool {
    out.fill(0);
    if value.is_zero() {
        return true;
    }
    let raw = value.to_bytes_be();
    if raw.len() > out.len() {
        return false;
    }
    let offset = out.len() - raw.len();
    out[offset..].copy_from_slice(&raw);
    true
}

/// Decode a big-endian integer of any width
pub fn biguint_from_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}
