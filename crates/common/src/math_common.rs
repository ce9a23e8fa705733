//! Common number-theoretic operations for the group realizations

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// Primes below 256, used for trial division before Miller-Rabin
const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181,
    191, 193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Probabilistic primality test
///
/// Trial division by the primes below 256, then `rounds` Miller-Rabin
/// rounds with bases drawn uniformly from `[2, n - 2]`. A composite passes
/// with probability at most `4^-rounds`.
pub fn is_probable_prime<R: RngCore + CryptoRng>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    let two = BigUint::from(2u8);
    if *n < two {
        return false;
    }
    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if *n == p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Legendre symbol of `a` modulo the odd prime `p`, as `a^((p-1)/2) mod p`
///
/// Returns 0 for multiples of `p`, 1 for quadratic residues and `p - 1`
/// for non-residues.
pub fn legendre(a: &BigUint, p: &BigUint) -> BigUint {
    let exponent = (p - 1u8) >> 1;
    a.modpow(&exponent, p)
}

/// Square root modulo the odd prime `p` (Tonelli-Shanks)
///
/// Returns `None` when `a` is a quadratic non-residue. Of the two roots,
/// whichever the algorithm reaches first is returned; callers pick the one
/// with the parity they need.
pub fn sqrt_mod(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return Some(a);
    }
    let p_minus_one = p - 1u8;
    if legendre(&a, p) != BigUint::one() {
        return None;
    }

    // p = 3 mod 4 has a closed form
    if p.bit(0) && p.bit(1) {
        let exponent = (p + 1u8) >> 2;
        return Some(a.modpow(&exponent, p));
    }

    // p - 1 = q * 2^s with q odd
    let s = p_minus_one.trailing_zeros().unwrap_or(0);
    let q = &p_minus_one >> s;

    // any non-residue serves as z
    let mut z = BigUint::from(2u8);
    while legendre(&z, p) != p_minus_one {
        z += 1u8;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + 1u8) >> 1), p);

    while !t.is_one() {
        // least i with t^(2^i) = 1
        let mut i = 0u64;
        let mut t_pow = t.clone();
        while !t_pow.is_one() {
            t_pow = (&t_pow * &t_pow) % p;
            i += 1;
            if i == m {
                return None;
            }
        }
        let b = c.modpow(&(BigUint::one() << (m - i - 1)), p);
        m = i;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        r = (&r * &b) % p;
    }
    Some(r)
}
