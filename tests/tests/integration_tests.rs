//! End-to-end scenarios across the group realizations

use dgroup_algorithms::algebra::CryptoGroupAlgebra;
use dgroup_algorithms::ec::{CurveParameters, MontgomeryCurveAlgebra, WeierstrassCurveAlgebra};
use dgroup_algorithms::multiplicative::MultiplicativeGroupAlgebra;
use dgroup_algorithms::{CryptoGroup, Error, PointEncoding};
use dgroup_tests::fixtures::{modp_23, p256};
use num_bigint::BigUint;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn n(v: u64) -> BigUint {
    BigUint::from(v)
}

#[test]
fn multiplicative_reference_vectors() {
    let g = modp_23();
    assert_eq!(g.add(&n(4), &n(18)), n(3));
    let expected = [(0, 1), (1, 3), (2, 9), (3, 4), (4, 12), (5, 13), (6, 16), (13, 9)];
    for (k, e) in expected {
        assert_eq!(g.multiply_scalar(&n(3), &n(k)), n(e), "{k} * 3");
    }
}

#[test]
fn safety_policy() {
    let g = modp_23();
    assert!(!g.is_safe_element(g.neutral_element()));
    assert!(!g.is_safe_element(&n(1)));
    assert!(!g.is_safe_element(&n(22)));
    assert!(g.is_safe_element(&n(2)));

    let curve = p256(PointEncoding::Compressed);
    assert!(!curve.is_safe_element(curve.neutral_element()));
    assert!(curve.is_safe_element(curve.generator()));
}

#[test]
fn p256_generator_codec() {
    let gx = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";
    let gy = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

    let compressed = p256(PointEncoding::Compressed);
    let bytes = compressed.to_bytes(compressed.generator());
    assert_eq!(bytes.len(), 33);
    assert_eq!(hex::encode(&bytes), format!("03{gx}"));
    assert_eq!(compressed.from_bytes(&bytes).unwrap(), *compressed.generator());

    let uncompressed = p256(PointEncoding::Uncompressed);
    assert_eq!(uncompressed.element_bit_length().bits(), 520);
    let bytes = uncompressed.to_bytes(uncompressed.generator());
    assert_eq!(hex::encode(&bytes), format!("04{gx}{gy}"));
    // any algebra decodes any encoding
    assert_eq!(compressed.from_bytes(&bytes).unwrap(), *compressed.generator());

    let hybrid = p256(PointEncoding::Hybrid);
    let bytes = hybrid.to_bytes(hybrid.generator());
    assert_eq!(bytes[0], 0x07);
    assert_eq!(bytes.len(), 65);

    // the point at infinity is accepted as a potential element, without coordinates
    let infinity = compressed.from_bytes(&[0u8; 33]).unwrap();
    assert!(compressed.is_potential_element(&infinity));
    assert!(matches!(infinity.x(), Err(Error::PointAtInfinity { .. })));
}

#[test]
fn p256_homomorphism() {
    let curve = p256(PointEncoding::Compressed);
    let k1 = BigUint::parse_bytes(b"c0ffee", 16).unwrap();
    let k2 = BigUint::parse_bytes(b"1d0c5a7e", 16).unwrap();
    let left = curve.add(&curve.generate_element(&k1), &curve.generate_element(&k2));
    assert_eq!(left, curve.generate_element(&(&k1 + &k2)));
}

#[test]
fn diffie_hellman_agreement_on_every_realization() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);

    fn agree<A: CryptoGroupAlgebra>(group: &CryptoGroup<A>, rng: &mut ChaCha20Rng) {
        let (a, big_a) = group.generate_random(rng).unwrap();
        let (b, big_b) = group.generate_random(rng).unwrap();

        // each side decodes the other's public element
        let big_a = group.element_from_bytes(&big_a.to_bytes()).unwrap();
        let big_b = group.element_from_bytes(&big_b.to_bytes()).unwrap();
        assert!(big_a.is_safe() && big_b.is_safe());

        let shared_a = &big_b * &a;
        let shared_b = &big_a * &b;
        assert_eq!(shared_a, shared_b);
        assert_eq!(shared_a.to_string(), shared_b.to_string());
    }

    agree(&CryptoGroup::new(modp_23()), &mut rng);
    agree(
        &WeierstrassCurveAlgebra::create_crypto_group(CurveParameters::test_curve_23().unwrap())
            .unwrap(),
        &mut rng,
    );
    agree(
        &MontgomeryCurveAlgebra::create_crypto_group(CurveParameters::test_curve_41().unwrap())
            .unwrap(),
        &mut rng,
    );
    agree(&CryptoGroup::new(MultiplicativeGroupAlgebra::rfc3526_2048().unwrap()), &mut rng);
}

#[test]
fn error_taxonomy() {
    let g = modp_23();

    let err = g.from_bytes(&[0, 1]).unwrap_err();
    assert!(matches!(err, Error::InvalidLength { .. }));
    assert!(!err.is_precondition_violation());

    let err = g.from_bytes(&[0]).unwrap_err();
    assert!(matches!(err, Error::InvalidElement { .. }));

    let err = g
        .multiply_scalar_with_bit_length(&n(2), &n(300), dgroup_algorithms::BitLength::from_bits(8))
        .unwrap_err();
    assert!(err.is_precondition_violation());
    assert_eq!(err.to_string(), "CryptoGroupAlgebra::multiply_scalar: invalid scalar: scalar has 9 bits, bound is 8");

    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let err = MultiplicativeGroupAlgebra::new_checked(n(21), n(11), n(2), &mut rng).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));
}
