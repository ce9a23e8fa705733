// src/fixtures.rs

use dgroup_algorithms::ec::{CurveParameters, MontgomeryCurveAlgebra, WeierstrassCurveAlgebra};
use dgroup_algorithms::multiplicative::MultiplicativeGroupAlgebra;
use dgroup_algorithms::PointEncoding;
use dgroup_params::traditional::dh::TEST_MODP_23;

/// Integers modulo 23, subgroup of order 11 generated by 2
pub fn modp_23() -> MultiplicativeGroupAlgebra {
    MultiplicativeGroupAlgebra::from_constants(&TEST_MODP_23).unwrap()
}

/// `y^2 = x^3 - 2x + 9` over F_23, G = (5, 3) of order 11
pub fn weierstrass_23() -> WeierstrassCurveAlgebra {
    WeierstrassCurveAlgebra::new(CurveParameters::test_curve_23().unwrap()).unwrap()
}

/// `3y^2 = x^3 + 4x^2 + x` over F_41, G = (7, 10) of order 11
pub fn montgomery_41() -> MontgomeryCurveAlgebra {
    MontgomeryCurveAlgebra::new(CurveParameters::test_curve_41().unwrap()).unwrap()
}

pub fn p256(encoding: PointEncoding) -> WeierstrassCurveAlgebra {
    WeierstrassCurveAlgebra::with_encoding(CurveParameters::nist_p256().unwrap(), encoding)
        .unwrap()
}
