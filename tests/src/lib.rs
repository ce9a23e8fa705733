//! Shared fixtures for the dgroup integration tests
pub mod counting;
pub mod fixtures;
