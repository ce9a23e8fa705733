//! Property-based tests of the group laws on the small test groups

use dgroup_algorithms::algebra::CryptoGroupAlgebra;
use dgroup_algorithms::ec::{CurveEquation, CurvePoint};
use dgroup_algorithms::{BitLength, PointEncoding};
use dgroup_tests::fixtures::{modp_23, montgomery_41, weierstrass_23};
use num_bigint::BigUint;
use proptest::prelude::*;

fn k(v: u64) -> BigUint {
    BigUint::from(v)
}

/// Every affine point of a curve over a tiny field, plus infinity
fn all_points<E: CurveEquation>(equation: &E, p: u32) -> Vec<CurvePoint> {
    let mut points = vec![CurvePoint::point_at_infinity()];
    for x in 0..p {
        for y in 0..p {
            if equation.is_point_on_curve(&BigUint::from(x), &BigUint::from(y)) {
                points.push(CurvePoint::new(BigUint::from(x), BigUint::from(y)));
            }
        }
    }
    points
}

fn check_full_curve_laws<A>(algebra: &A, points: &[CurvePoint])
where
    A: CryptoGroupAlgebra<Element = CurvePoint>,
{
    let o = algebra.neutral_element();
    for a in points {
        assert_eq!(algebra.add(a, o), *a);
        assert_eq!(algebra.add(a, &algebra.negate(a)), *o);
        for b in points {
            let ab = algebra.add(a, b);
            assert!(algebra.is_potential_element(&ab), "{a:?} + {b:?}");
            assert_eq!(ab, algebra.add(b, a));
            for c in points {
                assert_eq!(algebra.add(&ab, c), algebra.add(a, &algebra.add(b, c)));
            }
        }
    }
}

#[test]
fn weierstrass_curve_is_an_abelian_group() {
    let curve = weierstrass_23();
    let points = all_points(curve.equation(), 23);
    assert_eq!(points.len(), 22);
    check_full_curve_laws(&curve, &points);
}

#[test]
fn montgomery_curve_is_an_abelian_group() {
    let curve = montgomery_41();
    let points = all_points(curve.equation(), 41);
    assert_eq!(points.len(), 44);
    check_full_curve_laws(&curve, &points);
}

#[test]
fn safe_elements_are_exactly_those_outside_small_subgroups() {
    let curve = montgomery_41();
    for point in all_points(curve.equation(), 41) {
        let doubled = curve.add(&point, &point);
        let times_cofactor = curve.add(&doubled, &doubled);
        assert_eq!(curve.is_safe_element(&point), !times_cofactor.is_at_infinity(), "{point:?}");
    }
}

proptest! {
    #[test]
    fn modp_homomorphism(k1 in 0u64..1000, k2 in 0u64..1000) {
        let g = modp_23();
        let sum = g.add(&g.generate_element(&k(k1)), &g.generate_element(&k(k2)));
        prop_assert_eq!(sum, g.generate_element(&k(k1 + k2)));

        let nested = g.multiply_scalar(&g.generate_element(&k(k1)), &k(k2));
        prop_assert_eq!(nested, g.generate_element(&k(k1 * k2)));
    }

    #[test]
    fn modp_inverse_and_codec(scalar in 0u64..11) {
        let g = modp_23();
        let e = g.generate_element(&k(scalar));
        prop_assert_eq!(g.add(&e, &g.negate(&e)), g.neutral_element().clone());
        prop_assert_eq!(g.from_bytes(&g.to_bytes(&e)).unwrap(), e);
    }

    #[test]
    fn weierstrass_homomorphism(k1 in 0u64..200, k2 in 0u64..200) {
        let curve = weierstrass_23();
        let sum = curve.add(&curve.generate_element(&k(k1)), &curve.generate_element(&k(k2)));
        prop_assert_eq!(sum, curve.generate_element(&k(k1 + k2)));

        let nested = curve.multiply_scalar(&curve.generate_element(&k(k1)), &k(k2));
        prop_assert_eq!(nested, curve.generate_element(&k(k1 * k2)));
    }

    #[test]
    fn montgomery_homomorphism(k1 in 0u64..200, k2 in 0u64..200) {
        let curve = montgomery_41();
        let sum = curve.add(&curve.generate_element(&k(k1)), &curve.generate_element(&k(k2)));
        prop_assert_eq!(sum, curve.generate_element(&k(k1 + k2)));
    }

    #[test]
    fn curve_codec_accepts_every_encoding(scalar in 0u64..11) {
        let curve = weierstrass_23();
        let point = curve.generate_element(&k(scalar));
        for encoding in [PointEncoding::Compressed, PointEncoding::Uncompressed, PointEncoding::Hybrid] {
            let bytes = curve.to_bytes_with(&point, encoding);
            prop_assert_eq!(bytes.len(), encoding.byte_length(1));
            prop_assert_eq!(curve.from_bytes(&bytes).unwrap(), point.clone());
        }

        let curve = montgomery_41();
        let point = curve.generate_element(&k(scalar));
        prop_assert_eq!(curve.from_bytes(&curve.to_bytes(&point)).unwrap(), point);
    }

    #[test]
    fn bounded_and_reduced_multiplication_agree(scalar in 0u64..16) {
        let curve = weierstrass_23();
        let g = curve.generator();
        let bounded = curve
            .multiply_scalar_with_bit_length(g, &k(scalar), BitLength::from_bits(4))
            .unwrap();
        prop_assert_eq!(bounded, curve.multiply_scalar(g, &k(scalar)));
    }
}
