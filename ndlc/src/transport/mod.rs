// ndlc/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "spi")]
pub mod spi;
pub mod traits;

pub use mock::MockTransport;
#[cfg(feature = "spi")]
pub use spi::SpiTransport;
pub use traits::Transport;
