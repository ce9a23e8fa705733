//! Public API types for the dgroup library
//!
//! This crate provides the error taxonomy, validation helpers and length
//! types shared by every crate of the dgroup ecosystem.

#![forbid(unsafe_code)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::BitLength;
