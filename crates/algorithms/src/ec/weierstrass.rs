//! Short Weierstrass curves `y^2 = x^3 + a*x + b`

use dgroup_api::{Error, Result};
use dgroup_common::PrimeField;
use dgroup_params::traditional::ecdh::CurveForm;
use num_bigint::BigUint;
use num_traits::Zero;

use super::equation::CurveEquation;

/// The equation `y^2 = x^3 + a*x + b` over `F_p`, `p > 3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeierstrassEquation {
    field: PrimeField,
    a: BigUint,
    b: BigUint,
}

impl CurveEquation for WeierstrassEquation {
    const FORM: CurveForm = CurveForm::Weierstrass;

    fn from_coefficients(field: PrimeField, a: BigUint, b: BigUint) -> Result<Self> {
        if *field.modulus().as_biguint() <= BigUint::from(3u8) {
            return Err(Error::param(
                "WeierstrassEquation",
                "field characteristic must exceed 3",
            ));
        }
        let a = field.reduce(&a);
        let b = field.reduce(&b);
        // 4a^3 + 27b^2 != 0
        let a_cubed = field.mul(&field.square(&a), &a);
        let discriminant = field.add(
            &field.mul(&BigUint::from(4u8), &a_cubed),
            &field.mul(&BigUint::from(27u8), &field.square(&b)),
        );
        if discriminant.is_zero() {
            return Err(Error::param("WeierstrassEquation", "curve is singular"));
        }
        Ok(Self { field, a, b })
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
        let f = &self.field;
        let x_cubed = f.mul(&f.square(x), x);
        f.add(&f.add(&x_cubed, &f.mul(&self.a, x)), &self.b)
    }

    fn tangent_slope(&self, x: &BigUint, y: &BigUint) -> BigUint {
        // (3x^2 + a) / 2y
        let f = &self.field;
        let numerator = f.add(&f.mul(&BigUint::from(3u8), &f.square(x)), &self.a);
        let denominator = f.add(y, y);
        f.mul(&numerator, &f.invert(&denominator))
    }

    fn chord_x(&self, slope: &BigUint, x1: &BigUint, x2: &BigUint) -> BigUint {
        // slope^2 - x1 - x2
        let f = &self.field;
        f.sub(&f.sub(&f.square(slope), x1), x2)
    }
}
