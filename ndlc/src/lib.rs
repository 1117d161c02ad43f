// ndlc/src/lib.rs

//! ndlc
//!
//! Pure Rust implementation of the NDLC link layer used to talk to
//! SPI-attached secure elements (ST33-class chips).
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the protocol enums in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
