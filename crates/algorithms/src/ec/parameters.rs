//! Domain parameters of a prime-order subgroup of an elliptic curve

use dgroup_api::{Error, Result};
use dgroup_common::{CheckedPrime, PrimeField};
use dgroup_params::traditional::ecdh::{self, CurveConstants};
use num_bigint::BigUint;

use super::equation::CurveEquation;
use super::montgomery::MontgomeryEquation;
use super::point::CurvePoint;
use super::weierstrass::WeierstrassEquation;

/// Curve equation plus the generator, its prime order and the cofactor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParameters<E: CurveEquation> {
    name: &'static str,
    equation: E,
    generator: CurvePoint,
    order: CheckedPrime,
    cofactor: BigUint,
}

impl<E: CurveEquation> CurveParameters<E> {
    /// Bundle parameters, checking that the generator lies on the curve
    ///
    /// Whether the generator is outside the small subgroups is checked when
    /// the parameters are turned into an algebra.
    pub fn new(
        name: &'static str,
        equation: E,
        generator: CurvePoint,
        order: CheckedPrime,
        cofactor: BigUint,
    ) -> Result<Self> {
        let (gx, gy) = generator
            .coordinates()
            .map_err(|e| e.with_context("CurveParameters generator"))?;
        if !equation.is_point_on_curve(gx, gy) {
            return Err(Error::param(
                "CurveParameters",
                format!("{name}: generator is not on the curve"),
            ));
        }
        Ok(Self {
            name,
            equation,
            generator,
            order,
            cofactor,
        })
    }

    /// Load published constants, trusting the primality of `p` and `n`
    pub fn from_constants(constants: &CurveConstants) -> Result<Self> {
        if constants.form != E::FORM {
            return Err(Error::param(
                "CurveParameters",
                format!("{} is not a {:?} curve", constants.name, E::FORM),
            ));
        }
        let field = PrimeField::new(CheckedPrime::new_unchecked(parse_hex(constants.p, "p")?));
        let equation = E::from_coefficients(
            field,
            parse_hex(constants.a, "a")?,
            parse_hex(constants.b, "b")?,
        )?;
        let generator = CurvePoint::new(
            parse_hex(constants.g_x, "generator x")?,
            parse_hex(constants.g_y, "generator y")?,
        );
        Self::new(
            constants.name,
            equation,
            generator,
            CheckedPrime::new_unchecked(parse_hex(constants.n, "order")?),
            BigUint::from(constants.h),
        )
    }

    /// Human-readable curve name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The curve equation
    pub fn equation(&self) -> &E {
        &self.equation
    }

    /// The generator point
    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    /// Prime order of the generator
    pub fn order(&self) -> &CheckedPrime {
        &self.order
    }

    /// Number of curve points divided by the order
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }
}

impl CurveParameters<WeierstrassEquation> {
    /// NIST P-256
    pub fn nist_p256() -> Result<Self> {
        Self::from_constants(&ecdh::NIST_P256)
    }

    /// secp256k1
    pub fn secp256k1() -> Result<Self> {
        Self::from_constants(&ecdh::SECP256K1)
    }

    /// `y^2 = x^3 - 2x + 9` over F_23, generator of order 11, cofactor 2
    pub fn test_curve_23() -> Result<Self> {
        Self::from_constants(&ecdh::TEST_WEIERSTRASS_23)
    }
}

impl CurveParameters<MontgomeryEquation> {
    /// Curve25519 with full affine coordinates
    pub fn curve25519() -> Result<Self> {
        Self::from_constants(&ecdh::CURVE25519)
    }

    /// `3y^2 = x^3 + 4x^2 + x` over F_41, generator of order 11, cofactor 4
    pub fn test_curve_41() -> Result<Self> {
        Self::from_constants(&ecdh::TEST_MONTGOMERY_41)
    }
}

fn parse_hex(value: &str, what: &'static str) -> Result<BigUint> {
    BigUint::parse_bytes(value.as_bytes(), 16)
        .ok_or_else(|| Error::param("CurveConstants", format!("malformed {what}")))
}
