//! The elliptic-curve realization of the group algebra contract

use dgroup_api::{validate, BitLength, Error, Result};
use dgroup_common::{CheckedPrime, PrimeField};
use num_bigint::BigUint;
use subtle::Choice;

use super::encoding::{decode_point, PointEncoding};
use super::equation::{self, CurveEquation};
use super::montgomery::MontgomeryEquation;
use super::parameters::CurveParameters;
use super::point::CurvePoint;
use super::weierstrass::WeierstrassEquation;
use crate::algebra::CryptoGroupAlgebra;
use crate::group::CryptoGroup;

/// Algebra of the prime-order subgroup generated by a curve point
///
/// Elements are [`CurvePoint`]s. The encoding chosen at construction
/// determines [`element_bit_length`](CryptoGroupAlgebra::element_bit_length)
/// and [`to_bytes`](CryptoGroupAlgebra::to_bytes); decoding accepts all
/// encodings regardless.
#[derive(Debug, Clone)]
pub struct CurveGroupAlgebra<E: CurveEquation> {
    parameters: CurveParameters<E>,
    neutral_element: CurvePoint,
    encoding: PointEncoding,
    order_bit_length: BitLength,
}

/// Curve algebra over a short Weierstrass curve
pub type WeierstrassCurveAlgebra = CurveGroupAlgebra<WeierstrassEquation>;

/// Curve algebra over a Montgomery curve
pub type MontgomeryCurveAlgebra = CurveGroupAlgebra<MontgomeryEquation>;

impl<E: CurveEquation> CurveGroupAlgebra<E> {
    /// Create the algebra with compressed point encoding
    pub fn new(parameters: CurveParameters<E>) -> Result<Self> {
        Self::with_encoding(parameters, PointEncoding::default())
    }

    /// Create the algebra with the given point encoding
    ///
    /// Fails if the generator is not a safe element.
    pub fn with_encoding(parameters: CurveParameters<E>, encoding: PointEncoding) -> Result<Self> {
        let order_bit_length = BitLength::of(parameters.order());
        let algebra = Self {
            parameters,
            neutral_element: CurvePoint::point_at_infinity(),
            encoding,
            order_bit_length,
        };
        if !algebra.is_safe_element(algebra.parameters.generator()) {
            tracing::warn!(
                curve = algebra.parameters.name(),
                "rejected curve group: generator is not a safe element"
            );
            return Err(Error::param(
                "CurveGroupAlgebra",
                "generator is not a safe element",
            ));
        }
        tracing::debug!(
            curve = algebra.parameters.name(),
            form = ?E::FORM,
            ?encoding,
            order_bits = order_bit_length.bits(),
            "created curve group algebra"
        );
        Ok(algebra)
    }

    /// Wrap a new algebra in a [`CryptoGroup`]
    pub fn create_crypto_group(parameters: CurveParameters<E>) -> Result<CryptoGroup<Self>> {
        Ok(CryptoGroup::new(Self::new(parameters)?))
    }

    /// The curve parameters
    pub fn parameters(&self) -> &CurveParameters<E> {
        &self.parameters
    }

    /// The curve equation
    pub fn equation(&self) -> &E {
        self.parameters.equation()
    }

    /// The base field
    pub fn field(&self) -> &PrimeField {
        self.parameters.equation().field()
    }

    /// The encoding used by [`to_bytes`](CryptoGroupAlgebra::to_bytes)
    pub fn encoding(&self) -> PointEncoding {
        self.encoding
    }

    /// Encode `point` with an encoding other than the configured one
    pub fn to_bytes_with(&self, point: &CurvePoint, encoding: PointEncoding) -> Vec<u8> {
        encoding.encode(self.equation(), point)
    }

    /// An affine point, checked to lie on the curve
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<CurvePoint> {
        validate::element(
            self.equation().is_point_on_curve(&x, &y),
            "CurveGroupAlgebra::point",
            "point is not on the curve",
        )?;
        Ok(CurvePoint::new(x, y))
    }
}

impl<E: CurveEquation> PartialEq for CurveGroupAlgebra<E> {
    fn eq(&self, other: &Self) -> bool {
        // the encoding only affects serialization, not the group
        self.parameters == other.parameters
    }
}

impl<E: CurveEquation> Eq for CurveGroupAlgebra<E> {}

impl<E: CurveEquation> CryptoGroupAlgebra for CurveGroupAlgebra<E> {
    type Element = CurvePoint;

    fn order(&self) -> &CheckedPrime {
        self.parameters.order()
    }

    fn generator(&self) -> &CurvePoint {
        self.parameters.generator()
    }

    fn neutral_element(&self) -> &CurvePoint {
        &self.neutral_element
    }

    fn cofactor(&self) -> &BigUint {
        self.parameters.cofactor()
    }

    fn element_bit_length(&self) -> BitLength {
        self.encoding.bit_length(self.field().element_byte_length())
    }

    fn order_bit_length(&self) -> BitLength {
        self.order_bit_length
    }

    fn add(&self, left: &CurvePoint, right: &CurvePoint) -> CurvePoint {
        self.equation().add(left, right)
    }

    fn multiplex(&self, selection: Choice, left: &CurvePoint, right: &CurvePoint) -> CurvePoint {
        equation::select(self.field(), selection, left, right)
    }

    fn is_potential_element(&self, element: &CurvePoint) -> bool {
        match element.coordinates() {
            Ok((x, y)) => self.equation().is_point_on_curve(x, y),
            Err(_) => true,
        }
    }

    fn to_bytes(&self, element: &CurvePoint) -> Vec<u8> {
        self.encoding.encode(self.equation(), element)
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<CurvePoint> {
        decode_point(self.equation(), bytes)
    }

    fn negate(&self, element: &CurvePoint) -> CurvePoint {
        self.equation().negate(element)
    }
}
