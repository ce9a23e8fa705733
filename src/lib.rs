//! # dgroup
//!
//! Cyclic group algebra for Diffie-Hellman style protocols: the
//! multiplicative group of a prime field and elliptic curves in short
//! Weierstrass or Montgomery form, behind one trait, with a constant-time
//! scalar multiplication engine and small-subgroup validation.
//!
//! ## Usage
//!
//! ```
//! use dgroup::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let group = WeierstrassCurveAlgebra::create_crypto_group(CurveParameters::nist_p256()?)?;
//!
//! let (alice_secret, alice_public) = group.generate_random(&mut OsRng)?;
//! let (bob_secret, bob_public) = group.generate_random(&mut OsRng)?;
//!
//! // public elements travel as bytes and are validated on the way in
//! let alice_public = group.element_from_bytes(&alice_public.to_bytes())?;
//! let bob_public = group.element_from_bytes(&bob_public.to_bytes())?;
//!
//! assert_eq!(&bob_public * &alice_secret, &alice_public * &bob_secret);
//! # Ok::<(), dgroup::prelude::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): OS randomness for [`CheckedPrime::new`](common::CheckedPrime::new)
//! - `serde`: derives for [`BitLength`](api::BitLength) and
//!   [`PointEncoding`](algorithms::PointEncoding)
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`api`]: error taxonomy and [`BitLength`](api::BitLength)
//! - [`common`]: [`CheckedPrime`](common::CheckedPrime), prime-field arithmetic
//! - [`internal`]: constant-time selection and fixed-width integer encoding
//! - [`params`]: published group and curve constants
//! - [`algorithms`]: the algebra contract, engine, realizations and group handles

pub use dgroup_algorithms as algorithms;
pub use dgroup_api as api;
pub use dgroup_common as common;
pub use dgroup_internal as internal;
pub use dgroup_params as params;

/// Common imports for dgroup users
pub mod prelude {
    pub use crate::algorithms::algebra::CryptoGroupAlgebra;
    pub use crate::algorithms::ec::{
        CurveEquation, CurveGroupAlgebra, CurveParameters, CurvePoint, MontgomeryCurveAlgebra,
        MontgomeryEquation, PointEncoding, WeierstrassCurveAlgebra, WeierstrassEquation,
    };
    pub use crate::algorithms::multiplicative::MultiplicativeGroupAlgebra;
    pub use crate::algorithms::{CryptoGroup, CryptoGroupElement};
    pub use crate::api::{BitLength, Error, Result};
    pub use crate::common::CheckedPrime;
    pub use num_bigint::BigUint;
}
