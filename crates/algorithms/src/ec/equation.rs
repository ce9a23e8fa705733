//! Curve equations and the branch-free affine group law
//!
//! Both supported forms share the chord-and-tangent construction and differ
//! only in the tangent slope and in how the third intersection's `x` follows
//! from the slope. [`CurveEquation::add`] is written once over those two
//! hooks.

use core::fmt;

use dgroup_api::Result;
use dgroup_common::PrimeField;
use dgroup_params::traditional::ecdh::CurveForm;
use num_bigint::BigUint;
use num_traits::Zero;
use subtle::Choice;

use super::point::CurvePoint;

/// An elliptic curve equation over a prime field
pub trait CurveEquation: fmt::Debug + Clone + PartialEq + Eq + Send + Sync {
    /// Which equation family this is
    const FORM: CurveForm;

    /// Build the equation from coefficients, rejecting singular curves
    fn from_coefficients(field: PrimeField, a: BigUint, b: BigUint) -> Result<Self>;

    /// The base field
    fn field(&self) -> &PrimeField;

    /// Coefficient `a`
    fn a(&self) -> &BigUint;

    /// Coefficient `b`
    fn b(&self) -> &BigUint;

    /// The value `y^2` must take at `x` for `(x, y)` to lie on the curve
    fn y_squared(&self, x: &BigUint) -> BigUint;

    /// Slope of the tangent at `(x, y)`
    ///
    /// Must not fail for `y = 0`; the inverse of zero is zero and the value
    /// is discarded by the caller.
    fn tangent_slope(&self, x: &BigUint, y: &BigUint) -> BigUint;

    /// `x` of the third intersection of the line with `slope` through `x1` and `x2`
    fn chord_x(&self, slope: &BigUint, x1: &BigUint, x2: &BigUint) -> BigUint;

    /// Whether `(x, y)` has canonical coordinates satisfying the equation
    fn is_point_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let field = self.field();
        field.contains(x) && field.contains(y) && field.square(y) == self.y_squared(x)
    }

    /// Sum of two points on the curve
    ///
    /// Every case (either operand at infinity, doubling, `P + (-P)` and the
    /// generic chord) is computed and the result is blended with
    /// [`PrimeField::multiplex`], so the sequence of field operations does
    /// not depend on which case applies.
    fn add(&self, left: &CurvePoint, right: &CurvePoint) -> CurvePoint {
        let field = self.field();
        let (x1, y1) = (left.raw_x(), left.raw_y());
        let (x2, y2) = (right.raw_x(), right.raw_y());

        let chord = field.mul(&field.sub(y2, y1), &field.invert(&field.sub(x2, x1)));
        let tangent = self.tangent_slope(x1, y1);

        let same_x = field.ct_eq(x1, x2);
        let same_y = field.ct_eq(y1, y2);
        // P = Q with y = 0 is a point of order two, so doubling gives infinity
        let is_doubling = same_x & same_y & !field.ct_is_zero(y1);
        let is_inverse = same_x & !is_doubling;

        let slope = field.multiplex(is_doubling, &chord, &tangent);
        let x3 = self.chord_x(&slope, x1, x2);
        let y3 = field.sub(&field.mul(&slope, &field.sub(x1, &x3)), y1);
        let sum = CurvePoint::from_parts(x3, y3, is_inverse);

        let result = select(field, right.infinity_flag(), &sum, left);
        let result = select(field, left.infinity_flag(), &result, right);
        normalize(field, result)
    }

    /// `-P = (x, -y)`; the point at infinity is its own negative
    fn negate(&self, point: &CurvePoint) -> CurvePoint {
        let field = self.field();
        CurvePoint::from_parts(
            point.raw_x().clone(),
            field.neg(point.raw_y()),
            point.infinity_flag(),
        )
    }
}

/// `when_zero` if `selection` is 0, `when_one` if 1
pub(crate) fn select(
    field: &PrimeField,
    selection: Choice,
    when_zero: &CurvePoint,
    when_one: &CurvePoint,
) -> CurvePoint {
    CurvePoint::from_parts(
        field.multiplex(selection, when_zero.raw_x(), when_one.raw_x()),
        field.multiplex(selection, when_zero.raw_y(), when_one.raw_y()),
        field.select_choice(selection, when_zero.infinity_flag(), when_one.infinity_flag()),
    )
}

/// Zero the placeholder coordinates of the point at infinity
fn normalize(field: &PrimeField, point: CurvePoint) -> CurvePoint {
    let zero = BigUint::zero();
    let flag = point.infinity_flag();
    CurvePoint::from_parts(
        field.multiplex(flag, point.raw_x(), &zero),
        field.multiplex(flag, point.raw_y(), &zero),
        flag,
    )
}
