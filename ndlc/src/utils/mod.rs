//! Utilities for ndlc: small, reusable helpers used across the crate.
//!
//! Currently only hex formatting, used to trace every transfer.

pub mod hex;

pub use hex::*;
