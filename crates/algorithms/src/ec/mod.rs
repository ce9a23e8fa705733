//! Elliptic-curve groups over prime fields
//!
//! A curve is described by a [`CurveEquation`] ([`WeierstrassEquation`] or
//! [`MontgomeryEquation`]) bundled with a generator, its order and the
//! cofactor in [`CurveParameters`]. [`CurveGroupAlgebra`] turns those into
//! a [`CryptoGroupAlgebra`](crate::algebra::CryptoGroupAlgebra) over affine
//! [`CurvePoint`]s.
//!
//! ```
//! use dgroup_algorithms::algebra::CryptoGroupAlgebra;
//! use dgroup_algorithms::ec::{CurveParameters, WeierstrassCurveAlgebra};
//! use num_bigint::BigUint;
//!
//! let curve = WeierstrassCurveAlgebra::new(CurveParameters::test_curve_23()?)?;
//! let p = curve.generate_element(&BigUint::from(3u8));
//! assert_eq!(curve.add(&p, &curve.negate(&p)), *curve.neutral_element());
//! # Ok::<(), dgroup_algorithms::Error>(())
//! ```

mod algebra;
mod encoding;
mod equation;
mod montgomery;
mod parameters;
mod point;
mod weierstrass;

pub use algebra::{CurveGroupAlgebra, MontgomeryCurveAlgebra, WeierstrassCurveAlgebra};
pub use encoding::{decode_point, PointEncoding, PointFormat};
pub use equation::CurveEquation;
pub use montgomery::MontgomeryEquation;
pub use parameters::CurveParameters;
pub use point::CurvePoint;
pub use weierstrass::WeierstrassEquation;
