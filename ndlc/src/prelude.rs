// ndlc/src/prelude.rs

pub use crate::device::{Device, DeviceBuilder, LinkConfig};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::Command;
pub use crate::transport::Transport;
pub use crate::{CardEvent, EngineError, Error, LinkState, Pcb, ReaderEvent, Result};

// Re-export small utilities for convenience
pub use crate::utils::{HexDump, bytes_to_hex, bytes_to_hex_spaced, parse_hex};
