// ndlc/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// One scripted reaction of the mock peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Bytes clocked back to the reader. Fewer bytes than requested
    /// simulate a short transfer.
    Bytes(Vec<u8>),
    /// The transfer fails at the bus level.
    Fail,
}

/// Mock transport for unit tests. It records transmitted buffers and
/// answers each transceive with the next queued reply.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<MockReply>,
    /// Reply used once the queue is drained. Without it a drained mock
    /// fails every transfer with `Timeout`.
    pub fallback: Option<Vec<u8>>,
    /// Record of `power` calls in order.
    pub power_calls: Vec<bool>,
    pub resets: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(MockReply::Bytes(resp));
    }

    /// Queue a bus-level failure for the next unconsumed transfer slot.
    pub fn push_failure(&mut self) {
        self.responses.push_back(MockReply::Fail);
    }

    pub fn set_fallback(&mut self, resp: Vec<u8>) {
        self.fallback = Some(resp);
    }

    /// Number of transceive calls seen so far.
    pub fn transfers(&self) -> usize {
        self.sent.len()
    }
}

impl Transport for MockTransport {
    fn transceive(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<usize> {
        self.sent.push(tx.to_vec());

        let reply = match self.responses.pop_front() {
            Some(MockReply::Bytes(bytes)) => bytes,
            Some(MockReply::Fail) => return Err(Error::Transport("injected failure".into())),
            None => match &self.fallback {
                Some(bytes) => bytes.clone(),
                None => return Err(Error::Timeout),
            },
        };

        let n = reply.len().min(tx.len()).min(rx.len());
        rx[..n].copy_from_slice(&reply[..n]);
        Ok(n)
    }

    fn power(&mut self, on: bool) -> Result<()> {
        self.power_calls.push(on);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        // Reset clears the sent log but keeps queued replies so tests can
        // pre-seed the peer before handing the transport to a Device.
        self.sent.clear();
        self.resets += 1;
        Ok(())
    }
}
