// ndlc/src/error.rs

use thiserror::Error;

use crate::types::LinkState;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("operation timed out")]
    Timeout,

    #[error("short transfer: expected {expected} bytes, exchanged {actual}")]
    ShortTransfer { expected: usize, actual: usize },

    #[error("retry budget of {retries} exhausted in state {state}")]
    Exhausted { retries: u8, state: LinkState },

    #[error("apdu payload too large: max {max} bytes, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },

    #[error("output buffer too small: need {required} bytes, have {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}

/// Error returned by an NDLC exchange.
pub type EngineError = Error;

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors the engine absorbs as a retry instead of surfacing.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::Timeout | Error::ShortTransfer { .. }
        )
    }

    /// Flatten into the negative status codes of the C interface
    /// (-1 communication error, -2 timeout, -3 init error).
    pub fn status_code(&self) -> i32 {
        match self {
            Error::Timeout => -2,
            Error::DeviceNotFound => -3,
            _ => -1,
        }
    }
}
