// ndlc/src/device/config.rs

//! Link configuration

use crate::constants::MAX_RETRIES;

/// Tunables of one NDLC link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkConfig {
    /// Retry budget shared by all states of one exchange.
    pub max_retries: u8,
}

impl LinkConfig {
    /// A budget of 0 is allowed; every exchange then fails with
    /// `Exhausted` before the first transfer.
    pub fn with_max_retries(mut self, max_retries: u8) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
        }
    }
}
