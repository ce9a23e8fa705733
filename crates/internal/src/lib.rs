//! Internal utilities for the dgroup library
//!
//! Not part of the stable API: the constant-time selection primitives the
//! algebra realizations are built from, and the fixed-width integer
//! encoding shared by every codec.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
