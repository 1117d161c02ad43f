//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers script the card side of an NDLC exchange on top of
//! MockTransport so tests across the crate and tests/ directory can reuse
//! the same peer behaviour.
#![allow(dead_code)]

use crate::constants::*;
use crate::types::CardEvent;
use crate::{device, transport, Result};

/// Replies of a card that answers the next exchange with `event` and
/// `payload` on the first attempt:
/// latch (DUMMY), ACK, data header, data body, DUMMY after our ACK.
#[doc(hidden)]
pub fn answer_replies(event: CardEvent, payload: &[u8]) -> Vec<Vec<u8>> {
    vec![
        latched(),
        vec![PCB_ACK, 0x00],
        data_header(payload.len()),
        data_body(event, payload),
        vec![DUMMY, DUMMY],
    ]
}

/// [`answer_replies`] for an R-APDU.
#[doc(hidden)]
pub fn happy_path_replies(payload: &[u8]) -> Vec<Vec<u8>> {
    answer_replies(CardEvent::Apdu, payload)
}

/// Reply to a command transfer meaning "latched". Long enough for any
/// command frame; the mock truncates it to the transfer length.
#[doc(hidden)]
pub fn latched() -> Vec<u8> {
    vec![DUMMY; RESPONSE_BUFFER_LEN]
}

/// Data header announcing a body that carries `payload_len` bytes.
#[doc(hidden)]
pub fn data_header(payload_len: usize) -> Vec<u8> {
    vec![PCB_DATA, (payload_len + DATA_PAYLOAD_OFFSET) as u8]
}

#[doc(hidden)]
pub fn data_body(event: CardEvent, payload: &[u8]) -> Vec<u8> {
    let mut body = vec![PCB_ACK, event.as_u8()];
    body.extend_from_slice(payload);
    body
}

/// One WTX round: data header then a WTX body.
#[doc(hidden)]
pub fn wtx_round() -> [Vec<u8>; 2] {
    [data_header(0), data_body(CardEvent::Wtx, &[])]
}

/// Build a MockTransport pre-seeded with the given replies.
#[doc(hidden)]
pub fn mock_with_replies(replies: Vec<Vec<u8>>) -> transport::mock::MockTransport {
    let mut mock = transport::mock::MockTransport::new();
    for r in replies {
        mock.push_response(r);
    }
    mock
}

/// Convenience: create and initialize a Device<Initialized> backed by a
/// MockTransport pre-seeded with the provided replies.
#[doc(hidden)]
pub fn initialized_mock_device(
    replies: Vec<Vec<u8>>,
) -> Result<device::Device<device::Initialized>> {
    let boxed: Box<dyn transport::traits::Transport> = Box::new(mock_with_replies(replies));
    device::Device::new_with_transport(boxed).initialize()
}
