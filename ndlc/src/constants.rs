// ndlc/src/constants.rs
//! Common protocol constants used across the crate

/// Filler byte sent while polling; also the peer's "not ready" reply.
pub const DUMMY: u8 = 0xFE;

/// Supervisory ACK frame PCB
pub const PCB_ACK: u8 = 0xE0;
/// Supervisory ACK frame PCB, resend variant
pub const PCB_ACK_RESEND: u8 = 0xE2;
/// Supervisory NACK frame PCB
pub const PCB_NACK: u8 = 0xD0;
/// Supervisory NACK frame PCB, resend variant
pub const PCB_NACK_RESEND: u8 = 0xD2;
/// Data frame PCB
pub const PCB_DATA: u8 = 0x80;
/// Data frame PCB, resend variant
pub const PCB_DATA_RESEND: u8 = 0x84;

/// Address byte carried by every reader command frame.
pub const READER_ADDRESS: u8 = 0xE0;

/// Reader -> card: APDU command. Card -> reader: APDU response.
pub const EVT_APDU: u8 = 0x50;
/// Reader -> card: abort the current APDU session.
pub const EVT_ABORT: u8 = 0x51;
/// Card -> reader: wait-time extension (same value as abort).
pub const EVT_WTX: u8 = 0x51;
/// Card -> reader: answer to reset.
pub const EVT_ATR: u8 = 0x52;

/// Retry budget shared by every state of one exchange.
pub const MAX_RETRIES: u8 = 100;

/// Command frame header: PCB, length, address, event.
pub const COMMAND_HEADER_LEN: usize = 4;

/// Largest APDU whose `2 + len` still fits the one-byte length field.
pub const MAX_APDU_LEN: usize = u8::MAX as usize - 2;

/// Receive buffer size: a full command frame echo (4 + 256 bytes).
pub const RESPONSE_BUFFER_LEN: usize = COMMAND_HEADER_LEN + 256;

/// Offset of the application payload inside a received data body
/// (`[ack_echo, event, payload...]`).
pub const DATA_PAYLOAD_OFFSET: usize = 2;
