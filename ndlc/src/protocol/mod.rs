// ndlc/src/protocol/mod.rs

pub mod commands;
pub mod engine;
pub mod frame;

pub use commands::Command;
pub use engine::Exchange;
pub use frame::{CommandFrame, DataBody, DataHeader};
