//! Byte encodings of curve points
//!
//! | Encoding     | Layout                        | Tag                   |
//! |--------------|-------------------------------|-----------------------|
//! | compressed   | `tag \|\| x`                  | `0x02 \| parity(y)`   |
//! | uncompressed | `tag \|\| x \|\| y`           | `0x04`                |
//! | hybrid       | `tag \|\| x \|\| y`           | `0x06 \| parity(y)`   |
//!
//! Coordinates are big-endian, left-padded to the byte length of the field
//! prime. The point at infinity encodes as an all-zero buffer of the
//! encoding's length. Decoding accepts any of the three layouts.

use dgroup_api::{validate, BitLength, Error, Result};
use dgroup_internal::endian::{biguint_from_be, write_biguint_be};
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::equation::CurveEquation;
use super::point::CurvePoint;

const TAG_COMPRESSED: u8 = 0x02;
const TAG_UNCOMPRESSED: u8 = 0x04;
const TAG_HYBRID: u8 = 0x06;

/// Layout used when encoding a curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointEncoding {
    /// Tag carrying the parity of `y`, then `x`
    #[default]
    Compressed,
    /// Fixed tag, then `x` and `y`
    Uncompressed,
    /// Tag carrying the parity of `y`, then `x` and `y`
    Hybrid,
}

impl PointEncoding {
    /// Encoded bit length for coordinates of `coordinate_bytes` bytes
    ///
    /// Coordinates are byte aligned, so this is always a whole number of
    /// bytes and agrees with [`byte_length`](Self::byte_length).
    pub fn bit_length(self, coordinate_bytes: usize) -> BitLength {
        BitLength::from_bytes(self.byte_length(coordinate_bytes))
    }

    /// Encoded byte length for coordinates of `coordinate_bytes` bytes
    pub fn byte_length(self, coordinate_bytes: usize) -> usize {
        match self {
            Self::Compressed => 1 + coordinate_bytes,
            Self::Uncompressed | Self::Hybrid => 1 + 2 * coordinate_bytes,
        }
    }

    /// Encode `point` on the curve given by `equation`
    pub fn encode<E: CurveEquation>(self, equation: &E, point: &CurvePoint) -> Vec<u8> {
        let width = equation.field().element_byte_length();
        let mut out = vec![0u8; self.byte_length(width)];
        let Ok((x, y)) = point.coordinates() else {
            return out;
        };
        let parity = u8::from(y.bit(0));
        out[0] = match self {
            Self::Compressed => TAG_COMPRESSED | parity,
            Self::Uncompressed => TAG_UNCOMPRESSED,
            Self::Hybrid => TAG_HYBRID | parity,
        };
        let fits = write_biguint_be(x, &mut out[1..1 + width]);
        debug_assert!(fits, "x coordinate exceeds the field width");
        if self != Self::Compressed {
            let fits = write_biguint_be(y, &mut out[1 + width..]);
            debug_assert!(fits, "y coordinate exceeds the field width");
        }
        out
    }
}

/// Layout of an encoded point, as read from its tag byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// All-zero buffer
    Infinity,
    /// `0x02` or `0x03`
    Compressed { y_is_odd: bool },
    /// `0x04`
    Uncompressed,
    /// `0x06` or `0x07`
    Hybrid { y_is_odd: bool },
}

impl PointFormat {
    /// Classify `bytes` for coordinates of `coordinate_bytes` bytes
    ///
    /// Checks the tag and the length that goes with it, not the coordinates.
    pub fn detect(bytes: &[u8], coordinate_bytes: usize) -> Result<Self> {
        const CONTEXT: &str = "PointFormat::detect";
        let compressed = PointEncoding::Compressed.byte_length(coordinate_bytes);
        let full = PointEncoding::Uncompressed.byte_length(coordinate_bytes);

        let Some(&tag) = bytes.first() else {
            return Err(Error::InvalidLength {
                context: CONTEXT,
                expected: compressed,
                actual: 0,
            });
        };
        match tag {
            0x00 => {
                if bytes.len() != compressed {
                    validate::length(CONTEXT, bytes.len(), full)?;
                }
                validate::element(
                    bytes.iter().all(|&b| b == 0),
                    CONTEXT,
                    "malformed point at infinity",
                )?;
                Ok(Self::Infinity)
            }
            0x02 | 0x03 => {
                validate::length(CONTEXT, bytes.len(), compressed)?;
                Ok(Self::Compressed {
                    y_is_odd: tag & 1 == 1,
                })
            }
            0x04 => {
                validate::length(CONTEXT, bytes.len(), full)?;
                Ok(Self::Uncompressed)
            }
            0x06 | 0x07 => {
                validate::length(CONTEXT, bytes.len(), full)?;
                Ok(Self::Hybrid {
                    y_is_odd: tag & 1 == 1,
                })
            }
            other => Err(Error::element(CONTEXT, format!("unknown tag {other:#04x}"))),
        }
    }

    /// The encoding that produces this layout, if any
    pub fn encoding(self) -> Option<PointEncoding> {
        match self {
            Self::Infinity => None,
            Self::Compressed { .. } => Some(PointEncoding::Compressed),
            Self::Uncompressed => Some(PointEncoding::Uncompressed),
            Self::Hybrid { .. } => Some(PointEncoding::Hybrid),
        }
    }
}

/// Decode a point in any of the three layouts and check it lies on the curve
pub fn decode_point<E: CurveEquation>(equation: &E, bytes: &[u8]) -> Result<CurvePoint> {
    const CONTEXT: &str = "decode_point";
    let field = equation.field();
    let width = field.element_byte_length();

    let format = PointFormat::detect(bytes, width)?;
    if format == PointFormat::Infinity {
        return Ok(CurvePoint::point_at_infinity());
    }

    let x = biguint_from_be(&bytes[1..1 + width]);
    validate::element(field.contains(&x), CONTEXT, "x coordinate out of range")?;

    let y = match format {
        PointFormat::Compressed { y_is_odd } => recover_y(equation, &x, y_is_odd)?,
        PointFormat::Hybrid { y_is_odd } => {
            let y = read_y(equation, &x, &bytes[1 + width..])?;
            validate::element(
                y.bit(0) == y_is_odd,
                CONTEXT,
                "hybrid tag disagrees with the parity of y",
            )?;
            y
        }
        PointFormat::Uncompressed | PointFormat::Infinity => {
            read_y(equation, &x, &bytes[1 + width..])?
        }
    };
    Ok(CurvePoint::new(x, y))
}

/// Read an explicit `y` and check `(x, y)` is on the curve
fn read_y<E: CurveEquation>(equation: &E, x: &BigUint, bytes: &[u8]) -> Result<BigUint> {
    let y = biguint_from_be(bytes);
    validate::element(
        equation.is_point_on_curve(x, &y),
        "decode_point",
        "point is not on the curve",
    )?;
    Ok(y)
}

/// The `y` with the requested parity such that `(x, y)` is on the curve
fn recover_y<E: CurveEquation>(equation: &E, x: &BigUint, y_is_odd: bool) -> Result<BigUint> {
    const CONTEXT: &str = "decode_point";
    let field = equation.field();
    let root = field
        .sqrt(&equation.y_squared(x))
        .ok_or_else(|| Error::element(CONTEXT, "no point with this x coordinate"))?;
    let y = if root.bit(0) == y_is_odd {
        root
    } else {
        field.neg(&root)
    };
    // y = 0 has no odd counterpart
    validate::element(y.bit(0) == y_is_odd, CONTEXT, "no point with this parity")?;
    Ok(y)
}
