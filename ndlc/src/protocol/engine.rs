// ndlc/src/protocol/engine.rs

//! NDLC frame engine.
//!
//! Drives one command/response exchange over a [`Transport`]:
//!
//! ```text
//! Idle -> SendCmd -> ReadAck -> ReadHeader -> ReadData -> SendAck -> Idle
//!            ^          |            ^            |
//!            +-- NACK --+            +---- WTX ---+
//! ```
//!
//! All states share one retry counter. Progress resets it, a stall
//! increments it, and the exchange fails once it reaches the budget.
//! WTX is progress, not a stall.

use log::{debug, trace, warn};

use crate::constants::*;
use crate::protocol::frame::{DataBody, DataHeader, supervisory};
use crate::transport::Transport;
use crate::types::{LinkState, Pcb};
use crate::utils::HexDump;
use crate::{Error, Result};

const FILLER: [u8; u8::MAX as usize] = [DUMMY; u8::MAX as usize];

/// State of a single in-flight exchange.
pub struct Exchange<'a> {
    transport: &'a mut dyn Transport,
    status: &'a mut LinkState,
    rx: &'a mut [u8],
    max_retries: u8,
    retries: u8,
    payload_len: usize,
    response_len: usize,
}

impl<'a> Exchange<'a> {
    /// `status` is the link state stored on the device; the exchange
    /// resumes from it and leaves it where the machine stopped. `rx`
    /// receives every transfer; on success the application payload sits
    /// at `rx[DATA_PAYLOAD_OFFSET..]`.
    pub fn new(
        transport: &'a mut dyn Transport,
        status: &'a mut LinkState,
        rx: &'a mut [u8],
        max_retries: u8,
    ) -> Self {
        Self {
            transport,
            status,
            rx,
            max_retries,
            retries: 0,
            payload_len: 0,
            response_len: 0,
        }
    }

    /// Run the state machine until the card's answer is acknowledged or
    /// the retry budget runs out. Returns the application payload length.
    pub fn run(mut self, command: &[u8]) -> Result<usize> {
        let required = command.len().max(FILLER.len());
        if self.rx.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: self.rx.len(),
            });
        }

        while self.retries < self.max_retries {
            match *self.status {
                LinkState::Idle => self.advance(LinkState::SendCmd),

                LinkState::SendCmd => {
                    if self.transfer(command) && self.rx[0] == DUMMY {
                        self.advance(LinkState::ReadAck);
                    } else {
                        self.stall("command not latched");
                    }
                }

                LinkState::ReadAck => {
                    if !self.transfer(&FILLER[..2]) {
                        self.stall("ack poll failed");
                        continue;
                    }
                    match Pcb::from_u8(self.rx[0]) {
                        Some(Pcb::Ack) => self.advance(LinkState::ReadHeader),
                        Some(Pcb::Nack) => {
                            debug!("card rejected command, resending");
                            self.advance(LinkState::SendCmd);
                        }
                        Some(pcb) if pcb.is_resend() => {
                            debug!("{:?} is not taken as {:?}", pcb, pcb.base());
                            self.stall("resend pcb");
                        }
                        _ => self.stall("no ack yet"),
                    }
                }

                LinkState::ReadHeader => {
                    if !self.transfer(&FILLER[..2]) {
                        self.stall("header poll failed");
                        continue;
                    }
                    match DataHeader::parse(&self.rx[..2]) {
                        Some(header) if header.len as usize >= DATA_PAYLOAD_OFFSET => {
                            self.payload_len = header.len as usize;
                            self.advance(LinkState::ReadData);
                        }
                        _ => self.stall("no data header"),
                    }
                }

                LinkState::ReadData => {
                    let len = self.payload_len;
                    if len < DATA_PAYLOAD_OFFSET || !self.transfer(&FILLER[..len]) {
                        self.stall("data read failed");
                        continue;
                    }
                    match DataBody::parse(&self.rx[..len]) {
                        Some(DataBody::Final { event, payload }) => {
                            trace!("final answer {:?}, {} bytes", event, payload.len());
                            self.response_len = payload.len();
                            self.advance(LinkState::SendAck);
                        }
                        Some(DataBody::Wtx) => {
                            debug!("wtx, polling header again");
                            self.advance(LinkState::ReadHeader);
                        }
                        None => self.stall("unexpected data body"),
                    }
                }

                LinkState::SendAck => {
                    if self.transfer(&supervisory(Pcb::Ack)) && self.rx[0] == DUMMY {
                        trace!("{} -> {}", LinkState::SendAck, LinkState::Idle);
                        *self.status = LinkState::Idle;
                        return Ok(self.response_len);
                    }
                    self.stall("ack not taken");
                }
            }
        }

        warn!(
            "retry budget of {} exhausted in state {}",
            self.max_retries, *self.status
        );
        Err(Error::Exhausted {
            retries: self.max_retries,
            state: *self.status,
        })
    }

    fn advance(&mut self, next: LinkState) {
        trace!("{} -> {}", *self.status, next);
        *self.status = next;
        self.retries = 0;
    }

    fn stall(&mut self, reason: &str) {
        self.retries += 1;
        debug!(
            "{} in {} (retry {}/{})",
            reason, *self.status, self.retries, self.max_retries
        );
    }

    /// Exchange `tx` with the peer. True only for a complete, non-empty
    /// round trip; transport errors and short transfers are absorbed here.
    fn transfer(&mut self, tx: &[u8]) -> bool {
        let rx = &mut self.rx[..tx.len()];
        trace!(">> {}", HexDump(tx));
        match self.transport.transceive(tx, rx) {
            Ok(n) if n == tx.len() && n > 0 => {
                trace!("<< {}", HexDump(rx));
                true
            }
            Ok(n) => {
                let err = Error::ShortTransfer {
                    expected: tx.len(),
                    actual: n,
                };
                debug!("{}", err);
                false
            }
            Err(e) => {
                debug!("{}", e);
                false
            }
        }
    }
}
