//! Constant values for the dgroup library
//!
//! Group parameters are stored as big-endian hexadecimal strings exactly as
//! the defining standards print them, so they can be compared against the
//! documents by eye. Parsing and validation happen in `dgroup-algorithms`.

#![no_std]

pub mod traditional;
