//! Constants for discrete-logarithm groups

pub mod dh;
pub mod ecdh;
