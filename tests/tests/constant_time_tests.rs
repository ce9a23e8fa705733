//! The engine's operation sequence must not depend on the scalar
//!
//! Timing measurements are too noisy to run on every build. These tests
//! count the group operations the engine requests instead, which catches
//! any data-dependent branch in the engine itself.

use dgroup_algorithms::algebra::CryptoGroupAlgebra;
use dgroup_algorithms::{BitLength, PointEncoding};
use dgroup_tests::counting::{CountingAlgebra, OperationCounts};
use dgroup_tests::fixtures::{modp_23, montgomery_41, p256, weierstrass_23};
use num_bigint::BigUint;

fn counts_for<A: CryptoGroupAlgebra>(algebra: &CountingAlgebra<A>, scalars: &[u64]) -> Vec<OperationCounts> {
    scalars
        .iter()
        .map(|&s| {
            let (_, counts) = algebra.measure(|a| a.multiply_scalar(a.generator(), &BigUint::from(s)));
            counts
        })
        .collect()
}

fn assert_uniform<A: CryptoGroupAlgebra>(algebra: CountingAlgebra<A>, scalars: &[u64]) {
    let bits = algebra.order_bit_length().bits();
    let expected = OperationCounts {
        adds: 2 * bits,
        multiplexes: bits,
    };
    for (s, counts) in scalars.iter().zip(counts_for(&algebra, scalars)) {
        assert_eq!(counts, expected, "scalar {s}");
    }
}

#[test]
fn multiplicative_engine_is_uniform() {
    assert_uniform(CountingAlgebra::new(modp_23()), &[0, 1, 2, 7, 10, 11, 1000]);
}

#[test]
fn weierstrass_engine_is_uniform() {
    assert_uniform(CountingAlgebra::new(weierstrass_23()), &[0, 1, 5, 8, 10]);
}

#[test]
fn montgomery_engine_is_uniform() {
    assert_uniform(CountingAlgebra::new(montgomery_41()), &[0, 3, 9, 10]);
}

#[test]
fn p256_engine_is_uniform() {
    // 0, 1 and a scalar with every bit set differ as much as scalars can
    let algebra = CountingAlgebra::new(p256(PointEncoding::Compressed));
    let all_ones = (BigUint::from(1u8) << 255u32) - 1u8;
    let (_, sparse) = algebra.measure(|a| a.multiply_scalar(a.generator(), &BigUint::from(1u8)));
    let (_, dense) = algebra.measure(|a| a.multiply_scalar(a.generator(), &all_ones));
    assert_eq!(sparse, dense);
    assert_eq!(sparse.adds, 512);
}

#[test]
fn explicit_bound_sets_the_cost() {
    let algebra = CountingAlgebra::new(weierstrass_23());
    for bound in [1usize, 3, 8, 20] {
        let (_, counts) = algebra.measure(|a| {
            a.multiply_scalar_with_bit_length(a.generator(), &BigUint::from(1u8), BitLength::from_bits(bound))
                .unwrap()
        });
        assert_eq!(counts.adds, 2 * bound);
        assert_eq!(counts.multiplexes, bound);
    }
}

#[test]
fn counting_wrapper_matches_the_realization() {
    // modexp shortcut and generic engine give the same results
    let plain = modp_23();
    let counted = CountingAlgebra::new(modp_23());
    for s in 0..30u64 {
        let s = BigUint::from(s);
        assert_eq!(
            counted.multiply_scalar(counted.generator(), &s),
            plain.multiply_scalar(plain.generator(), &s)
        );
    }
    assert_eq!(counted.inner(), &plain);
}
