use super::*;
use crate::ec::{CurveParameters, CurvePoint, WeierstrassCurveAlgebra};
use crate::multiplicative::MultiplicativeGroupAlgebra;
use core::num::NonZeroU32;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

type ModpGroup = CryptoGroup<MultiplicativeGroupAlgebra>;

fn n(v: u32) -> BigUint {
    BigUint::from(v)
}

fn modp(p: u32, q: u32, g: u32) -> ModpGroup {
    MultiplicativeGroupAlgebra::create_crypto_group(
        CheckedPrime::new_unchecked(n(p)),
        CheckedPrime::new_unchecked(n(q)),
        n(g),
    )
    .unwrap()
}

struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
    fn next_u64(&mut self) -> u64 {
        0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0)
    }
    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        Err(rand::Error::from(NonZeroU32::new(rand::Error::CUSTOM_START).unwrap()))
    }
}

impl CryptoRng for FailingRng {}

#[test]
fn test_lengths() {
    let group = modp(23, 11, 2);
    assert_eq!(group.order_bit_length().bits(), 4);
    assert_eq!(group.order_byte_length(), 1);
    assert_eq!(group.element_bit_length().bits(), 5);
    assert_eq!(group.element_byte_length(), 1);

    let curve = WeierstrassCurveAlgebra::create_crypto_group(CurveParameters::nist_p256().unwrap())
        .unwrap();
    assert_eq!(curve.element_byte_length(), 33);
    assert_eq!(curve.order_byte_length(), 32);
}

#[test]
fn test_element_construction() {
    let group = modp(23, 11, 2);
    assert_eq!(*group.generator().value(), n(2));
    assert!(group.neutral_element().is_neutral());

    // potential but not safe: still accepted
    let e = group.element(n(22)).unwrap();
    assert!(!e.is_safe());
    assert!(matches!(group.element(n(0)), Err(Error::InvalidElement { .. })));
    assert!(matches!(group.element(n(23)), Err(Error::InvalidElement { .. })));

    assert_eq!(group.element_from_bytes(&[9]).unwrap(), group.generate(&n(5)));
    assert!(group.element_from_bytes(&[0]).is_err());
}

#[test]
fn test_arithmetic() {
    let group = modp(23, 11, 2);
    let a = group.element(n(4)).unwrap();
    let b = group.element(n(18)).unwrap();

    assert_eq!(*a.try_add(&b).unwrap().value(), n(3));
    assert_eq!(*(&a + &b).value(), n(3));
    assert_eq!(*group.add(&a, &b).unwrap().value(), n(3));

    let three = group.element(n(3)).unwrap();
    assert_eq!(*(&three * &n(4)).value(), n(12));
    assert_eq!(*group.multiply_scalar(&three, &n(13)).unwrap().value(), n(9));

    assert!((&a + &(-&a)).is_neutral());
    assert!(a.try_sub(&a).unwrap().is_neutral());
    assert_eq!(&(&a + &b) - &b, a);
    assert_eq!(group.negate(&a).unwrap(), a.negate());
}

#[test]
fn test_bounded_multiplication() {
    let group = modp(23, 11, 2);
    let g = group.generator();
    let e = g
        .multiply_scalar_with_bit_length(&n(3), BitLength::from_bits(2))
        .unwrap();
    assert_eq!(*e.value(), n(8));

    let err = g
        .multiply_scalar_with_bit_length(&n(4), BitLength::from_bits(2))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidScalar { .. }));
    assert!(err.is_precondition_violation());
}

#[test]
fn test_group_mismatch() {
    let small = modp(23, 11, 2);
    let other = modp(47, 23, 2);
    let a = small.generator();
    let b = other.generator();

    assert!(!a.is_same_group(&b));
    assert_ne!(small, other);
    let err = a.try_add(&b).unwrap_err();
    assert!(matches!(err, Error::GroupMismatch { .. }));
    assert!(err.is_precondition_violation());
    assert!(a.try_sub(&b).is_err());
    assert!(matches!(other.add(&a, &a), Err(Error::GroupMismatch { .. })));
    assert!(matches!(other.negate(&a), Err(Error::GroupMismatch { .. })));
    assert!(other.multiply_scalar(&a, &n(2)).is_err());
    assert!(!other.contains(&a));
}

#[test]
#[should_panic(expected = "different groups")]
fn test_operator_panics_on_mismatch() {
    let a = modp(23, 11, 2).generator();
    let b = modp(47, 23, 2).generator();
    let _ = &a + &b;
}

#[test]
fn test_equal_parameters_make_equal_groups() {
    let first = modp(23, 11, 2);
    let second = modp(23, 11, 2);
    assert_eq!(first, second);
    assert_eq!(first.clone(), first);

    let sum = first.generator().try_add(&second.generator()).unwrap();
    assert_eq!(sum, first.generate(&n(2)));
    assert_eq!(sum.group(), second);
}

#[test]
fn test_display_as_hex() {
    let group = modp(23, 11, 2);
    assert_eq!(group.generate(&n(4)).to_string(), "10");

    let curve = WeierstrassCurveAlgebra::create_crypto_group(CurveParameters::test_curve_23().unwrap())
        .unwrap();
    assert_eq!(curve.generator().to_string(), "0305");
    assert_eq!(curve.neutral_element().to_string(), "0000");
}

#[test]
fn test_generate_random() {
    let group = modp(23, 11, 2);
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let mut seen = [false; 11];
    for _ in 0..200 {
        let (scalar, element) = group.generate_random(&mut rng).unwrap();
        assert!(scalar >= n(1) && scalar < n(11), "{scalar}");
        assert_eq!(element, group.generate(&scalar));
        assert!(element.is_safe());
        seen[usize::try_from(scalar.to_u32_digits()[0]).unwrap()] = true;
    }
    // every nonzero scalar shows up
    assert!(seen[1..].iter().all(|&s| s));
    assert!(!seen[0]);
}

#[test]
fn test_generate_random_on_curve() {
    let group = WeierstrassCurveAlgebra::create_crypto_group(CurveParameters::test_curve_23().unwrap())
        .unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let (scalar, element) = group.generate_random(&mut rng).unwrap();
    assert_ne!(*element.value(), CurvePoint::point_at_infinity());
    assert_eq!(group.element_from_bytes(&element.to_bytes()).unwrap(), element);
    assert_eq!(element, &group.generator() * &scalar);
}

#[test]
fn test_generate_random_reports_rng_failure() {
    let group = modp(23, 11, 2);
    let err = group.generate_random(&mut FailingRng).unwrap_err();
    assert!(matches!(err, Error::RandomGeneration { .. }));
}
