//! Affine curve points with an explicit point at infinity

use core::fmt;

use dgroup_api::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use subtle::Choice;

/// A point in affine coordinates, or the point at infinity
///
/// The infinity flag is a [`Choice`] so the addition formulas can blend it
/// without branching. The point at infinity always carries the coordinates
/// `(0, 0)`; they are placeholders and not exposed.
#[derive(Clone)]
pub struct CurvePoint {
    x: BigUint,
    y: BigUint,
    is_at_infinity: Choice,
}

impl CurvePoint {
    /// An affine point `(x, y)`; no curve membership check is performed
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self {
            x,
            y,
            is_at_infinity: Choice::from(0),
        }
    }

    /// The point at infinity
    pub fn point_at_infinity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
            is_at_infinity: Choice::from(1),
        }
    }

    pub(crate) fn from_parts(x: BigUint, y: BigUint, is_at_infinity: Choice) -> Self {
        Self {
            x,
            y,
            is_at_infinity,
        }
    }

    /// Whether this is the point at infinity
    pub fn is_at_infinity(&self) -> bool {
        self.is_at_infinity.into()
    }

    /// The infinity flag as a [`Choice`]
    pub fn infinity_flag(&self) -> Choice {
        self.is_at_infinity
    }

    /// The affine `x` coordinate
    ///
    /// # Errors
    ///
    /// [`Error::PointAtInfinity`] for the point at infinity.
    pub fn x(&self) -> Result<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The affine `y` coordinate
    ///
    /// # Errors
    ///
    /// [`Error::PointAtInfinity`] for the point at infinity.
    pub fn y(&self) -> Result<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Both affine coordinates
    pub fn coordinates(&self) -> Result<(&BigUint, &BigUint)> {
        if self.is_at_infinity() {
            return Err(Error::PointAtInfinity {
                context: "CurvePoint::coordinates",
            });
        }
        Ok((&self.x, &self.y))
    }

    // Coordinate access for the branch-free formulas; (0, 0) at infinity.
    pub(crate) fn raw_x(&self) -> &BigUint {
        &self.x
    }

    pub(crate) fn raw_y(&self) -> &BigUint {
        &self.y
    }
}

impl PartialEq for CurvePoint {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_at_infinity(), other.is_at_infinity()) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for CurvePoint {}

impl fmt::Debug for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_at_infinity() {
            f.write_str("CurvePoint(infinity)")
        } else {
            f.debug_struct("CurvePoint")
                .field("x", &format_args!("{:x}", self.x))
                .field("y", &format_args!("{:x}", self.y))
                .finish()
        }
    }
}
