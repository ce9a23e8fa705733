//! Montgomery curves `b*y^2 = x^3 + a*x^2 + x`
//!
//! Points are kept in full affine `(x, y)` form so the same chord-and-tangent
//! law and codec apply as for Weierstrass curves. There is no x-only ladder
//! here.

use dgroup_api::{Error, Result};
use dgroup_common::PrimeField;
use dgroup_params::traditional::ecdh::CurveForm;
use num_bigint::BigUint;
use num_traits::Zero;

use super::equation::CurveEquation;

/// The equation `b*y^2 = x^3 + a*x^2 + x` over `F_p`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MontgomeryEquation {
    field: PrimeField,
    a: BigUint,
    b: BigUint,
    b_inverse: BigUint,
}

impl CurveEquation for MontgomeryEquation {
    const FORM: CurveForm = CurveForm::Montgomery;

    fn from_coefficients(field: PrimeField, a: BigUint, b: BigUint) -> Result<Self> {
        let a = field.reduce(&a);
        let b = field.reduce(&b);
        // b * (a^2 - 4) != 0
        let a_squared_minus_four = field.sub(&field.square(&a), &BigUint::from(4u8));
        if field.mul(&b, &a_squared_minus_four).is_zero() {
            return Err(Error::param("MontgomeryEquation", "curve is singular"));
        }
        let b_inverse = field.invert(&b);
        Ok(Self {
            field,
            a,
            b,
            b_inverse,
        })
    }

    fn field(&self) -> &PrimeField {
        &self.field
    }

    fn a(&self) -> &BigUint {
        &self.a
    }

    fn b(&self) -> &BigUint {
        &self.b
    }

    fn y_squared(&self, x: &BigUint) -> BigUint {
        // (x^3 + a*x^2 + x) / b
        let f = &self.field;
        let x_squared = f.square(x);
        let rhs = f.add(&f.add(&f.mul(&x_squared, x), &f.mul(&self.a, &x_squared)), x);
        f.mul(&rhs, &self.b_inverse)
    }

    fn tangent_slope(&self, x: &BigUint, y: &BigUint) -> BigUint {
        // (3x^2 + 2ax + 1) / 2by
        let f = &self.field;
        let three_x_squared = f.mul(&BigUint::from(3u8), &f.square(x));
        let two_a_x = f.mul(&f.add(&self.a, &self.a), x);
        let numerator = f.add(&f.add(&three_x_squared, &two_a_x), &BigUint::from(1u8));
        let by = f.mul(&self.b, y);
        f.mul(&numerator, &f.invert(&f.add(&by, &by)))
    }

    fn chord_x(&self, slope: &BigUint, x1: &BigUint, x2: &BigUint) -> BigUint {
        // b * slope^2 - a - x1 - x2
        let f = &self.field;
        let b_slope_squared = f.mul(&self.b, &f.square(slope));
        f.sub(&f.sub(&f.sub(&b_slope_squared, &self.a), x1), x2)
    }
}
