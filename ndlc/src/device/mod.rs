// ndlc/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::LinkConfig;
pub use handle::{Device, Initialized, Uninitialized};
