// ndlc/src/protocol/frame.rs

use crate::constants::*;
use crate::types::{CardEvent, Pcb, ReaderEvent};
use crate::{Error, Result};

/// Reader command frame helper.
/// Format: [PCB=0x80(1)] [Len(1)] [Address=0xE0(1)] [Event(1)] [Payload(n)]
/// Len counts address + event + payload, so `n <= 253`.
pub struct CommandFrame;

impl CommandFrame {
    /// Encode an event and its payload into a full command frame
    pub fn encode(event: ReaderEvent, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_APDU_LEN {
            return Err(Error::PayloadTooLarge {
                max: MAX_APDU_LEN,
                actual: payload.len(),
            });
        }

        let mut out = Vec::with_capacity(COMMAND_HEADER_LEN + payload.len());
        out.push(PCB_DATA);
        out.push((2 + payload.len()) as u8);
        out.push(READER_ADDRESS);
        out.push(event.as_u8());
        out.extend_from_slice(payload);
        Ok(out)
    }
}

/// Two-byte supervisory frame: [PCB] [0x00]
pub fn supervisory(pcb: Pcb) -> [u8; 2] {
    [pcb.as_u8(), 0x00]
}

/// Header announcing a data frame from the card: [0x80] [Len]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataHeader {
    pub len: u8,
}

impl DataHeader {
    /// Recognise a data header. Only the exact `DATA` PCB is accepted;
    /// the resend variant is not treated as equivalent.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [PCB_DATA, len, ..] => Some(Self { len: *len }),
            _ => None,
        }
    }
}

/// Body of a data frame from the card: [0xE0] [Event] [Payload(len-2)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBody<'a> {
    /// APDU response or ATR; ends the exchange.
    Final { event: CardEvent, payload: &'a [u8] },
    /// Wait-time extension; the card needs more time.
    Wtx,
}

impl<'a> DataBody<'a> {
    pub fn parse(bytes: &'a [u8]) -> Option<Self> {
        let (&ack, rest) = bytes.split_first()?;
        let (&event, payload) = rest.split_first()?;
        if ack != PCB_ACK {
            return None;
        }

        let event = CardEvent::from_u8(event)?;
        if event.is_final() {
            Some(Self::Final { event, payload })
        } else {
            Some(Self::Wtx)
        }
    }
}
