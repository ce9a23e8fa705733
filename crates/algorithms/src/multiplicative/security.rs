//! Security-level estimates for prime-field groups
//!
//! Discrete logarithms modulo `p` fall to the general number field sieve
//! long before generic square-root attacks on the subgroup become relevant,
//! so the modulus size bounds the security level of the group.

use core::f64::consts::LN_2;

use dgroup_api::BitLength;

/// Estimated cost in bits of the number field sieve against a `modulus_bit_length` prime
///
/// Uses `1.923 * cbrt(ln p) * (ln ln p)^(2/3) / ln 2 - 4.69`, floored at
/// zero. The offset calibrates a 1024-bit modulus to about 80 bits.
pub fn estimate_nfs_security_level(modulus_bit_length: BitLength) -> usize {
    let ln_p = modulus_bit_length.bits() as f64 * LN_2;
    if ln_p <= 1.0 {
        return 0;
    }
    let ln_ln_p = ln_p.ln();
    let level = 1.923 * ln_p.cbrt() * ln_ln_p.powf(2.0 / 3.0) / LN_2 - 4.69;
    if level <= 0.0 {
        0
    } else {
        level.floor() as usize
    }
}

/// Smallest prime bit length whose group reaches `security_level`
///
/// Both the number field sieve estimate for the modulus and the generic
/// bound for the order `q = (p - 1) / 2` of a safe-prime group must reach
/// the target.
pub fn prime_bit_length_for_security_level(security_level: usize) -> BitLength {
    let mut bits = 2;
    while estimate_nfs_security_level(BitLength::from_bits(bits)) < security_level {
        bits += 1;
    }
    BitLength::from_bits(bits.max(2 * security_level + 1))
}
