//! Error handling for the group algebra ecosystem

pub mod types;
pub mod validate;

pub use types::{Error, Result};
