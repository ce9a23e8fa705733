//! Cyclic group algebra with constant-time scalar multiplication
//!
//! This crate provides the group algebra contract, the generic
//! double-and-add engine built on it, and two realizations: the
//! multiplicative group of a prime field and elliptic curves in short
//! Weierstrass or Montgomery form.
//!
//! # Layers
//!
//! - [`algebra`]: the [`CryptoGroupAlgebra`] trait over raw elements and
//!   the scalar multiplication [`engine`](algebra::engine)
//! - [`multiplicative`]: integers modulo a prime, including safe-prime
//!   group generation
//! - [`ec`]: curve equations, parameters, point codec and the curve algebra
//! - [`group`]: [`CryptoGroup`] and [`CryptoGroupElement`], which bind
//!   elements to their algebra and reject cross-group operations
//!
//! # Side channels
//!
//! Scalar multiplication performs a fixed number of group operations for a
//! given bit bound, and the curve group law selects between its cases with
//! arithmetic blends instead of branches. The arbitrary-precision integers
//! underneath are not constant-time, so this crate reduces but does not
//! remove timing leakage.

#![forbid(unsafe_code)]

pub use dgroup_api::{validate, BitLength, Error, Result};

pub mod algebra;
pub use algebra::CryptoGroupAlgebra;

pub mod multiplicative;
pub use multiplicative::MultiplicativeGroupAlgebra;

pub mod ec;
pub use ec::{
    CurveGroupAlgebra, CurveParameters, CurvePoint, MontgomeryCurveAlgebra, PointEncoding,
    WeierstrassCurveAlgebra,
};

pub mod group;
pub use group::{CryptoGroup, CryptoGroupElement};
