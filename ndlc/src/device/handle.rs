// ndlc/src/device/handle.rs

use std::marker::PhantomData;

use log::debug;

use crate::constants::{DATA_PAYLOAD_OFFSET, RESPONSE_BUFFER_LEN};
use crate::device::config::LinkConfig;
use crate::protocol::{Command, Exchange};
use crate::transport::Transport;
use crate::types::LinkState;
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Device handle for one NDLC link. Initialization state is enforced at
/// compile time; exchanges are only possible on `Device<Initialized>`.
///
/// The handle is not meant to be shared: every exchange takes `&mut self`,
/// so concurrent use needs external locking.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: LinkConfig,
    status: LinkState,
    response_len: usize,
    response: Vec<u8>,
    _state: PhantomData<State>,
}

impl<State> Device<State> {
    /// Current protocol state.
    pub fn status(&self) -> LinkState {
        self.status
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    fn into_state<Next>(self) -> Device<Next> {
        Device {
            transport: self.transport,
            config: self.config,
            status: self.status,
            response_len: self.response_len,
            response: self.response,
            _state: PhantomData,
        }
    }
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance with the
    /// default link configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, LinkConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: LinkConfig) -> Self {
        Self {
            transport,
            config,
            status: LinkState::Idle,
            response_len: 0,
            response: vec![0; RESPONSE_BUFFER_LEN],
            _state: PhantomData,
        }
    }

    /// Power the peripheral on and bring the link to `Idle`.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        self.transport.reset()?;
        self.transport.power(true)?;
        self.status = LinkState::Idle;
        self.response_len = 0;
        Ok(self.into_state())
    }
}

impl Device<Initialized> {
    /// Power the peripheral off and return the link to `Idle`.
    pub fn deinitialize(mut self) -> Result<Device<Uninitialized>> {
        self.transport.power(false)?;
        self.status = LinkState::Idle;
        self.response_len = 0;
        Ok(self.into_state())
    }

    /// Run one NDLC exchange for an already framed command. On success
    /// the card's payload is available through [`Device::response`].
    ///
    /// The exchange resumes from the current [`LinkState`]; callers that
    /// want a fresh exchange go through [`Device::execute`].
    pub fn exchange(&mut self, command: &[u8]) -> Result<()> {
        self.response_len = 0;
        let len = Exchange::new(
            &mut *self.transport,
            &mut self.status,
            &mut self.response,
            self.config.max_retries,
        )
        .run(command)?;
        self.response_len = len;
        Ok(())
    }

    /// Encode `cmd`, reset the link to `Idle`, and run the exchange.
    pub fn execute(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        let frame = cmd.encode()?;
        if self.status != LinkState::Idle {
            debug!("discarding stale link state {}", self.status);
        }
        self.status = LinkState::Idle;
        self.exchange(&frame)?;
        Ok(self.response().to_vec())
    }

    /// Send the Abort command and return the card's answer.
    pub fn abort(&mut self) -> Result<Vec<u8>> {
        self.execute(&Command::Abort)
    }

    /// Send an APDU (at most 253 bytes) and return the card's R-APDU.
    pub fn apdu(&mut self, payload: &[u8]) -> Result<Vec<u8>> {
        self.execute(&Command::Apdu(payload.to_vec()))
    }

    /// Retrieve the Answer-To-Reset. The card answers an abort with its
    /// ATR, so this is an abort exchange.
    pub fn atr(&mut self) -> Result<Vec<u8>> {
        self.abort()
    }

    /// Like [`Device::abort`], copying the answer into `out`.
    pub fn abort_into(&mut self, out: &mut [u8]) -> Result<usize> {
        self.abort()?;
        self.copy_response(out)
    }

    /// Like [`Device::apdu`], copying the R-APDU into `out`.
    pub fn apdu_into(&mut self, payload: &[u8], out: &mut [u8]) -> Result<usize> {
        self.apdu(payload)?;
        self.copy_response(out)
    }

    /// Length of the last received payload; zero unless the last
    /// exchange succeeded.
    pub fn response_len(&self) -> usize {
        self.response_len
    }

    /// Payload of the last successful exchange.
    pub fn response(&self) -> &[u8] {
        &self.response[DATA_PAYLOAD_OFFSET..DATA_PAYLOAD_OFFSET + self.response_len]
    }

    fn copy_response(&self, out: &mut [u8]) -> Result<usize> {
        let payload = self.response();
        if out.len() < payload.len() {
            return Err(Error::BufferTooSmall {
                required: payload.len(),
                actual: out.len(),
            });
        }
        out[..payload.len()].copy_from_slice(payload);
        Ok(payload.len())
    }
}
