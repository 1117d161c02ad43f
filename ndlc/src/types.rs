// ndlc/src/types.rs

use derive_more::Display;

use crate::constants::*;

/// Protocol state of one NDLC link.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkState {
    #[default]
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "send-cmd")]
    SendCmd,
    #[display(fmt = "read-ack")]
    ReadAck,
    #[display(fmt = "read-header")]
    ReadHeader,
    #[display(fmt = "read-data")]
    ReadData,
    #[display(fmt = "send-ack")]
    SendAck,
}

/// Protocol Control Byte - first byte of every frame.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pcb {
    Ack = PCB_ACK,
    AckResend = PCB_ACK_RESEND,
    Nack = PCB_NACK,
    NackResend = PCB_NACK_RESEND,
    Data = PCB_DATA,
    DataResend = PCB_DATA_RESEND,
}

impl Pcb {
    pub fn from_u8(b: u8) -> Option<Self> {
        match b {
            PCB_ACK => Some(Self::Ack),
            PCB_ACK_RESEND => Some(Self::AckResend),
            PCB_NACK => Some(Self::Nack),
            PCB_NACK_RESEND => Some(Self::NackResend),
            PCB_DATA => Some(Self::Data),
            PCB_DATA_RESEND => Some(Self::DataResend),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_resend(self) -> bool {
        matches!(self, Self::AckResend | Self::NackResend | Self::DataResend)
    }

    /// The non-resend PCB this value belongs to.
    pub fn base(self) -> Self {
        match self {
            Self::AckResend => Self::Ack,
            Self::NackResend => Self::Nack,
            Self::DataResend => Self::Data,
            other => other,
        }
    }
}

/// Event codes sent by the reader in a command frame.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderEvent {
    Apdu = EVT_APDU,
    Abort = EVT_ABORT,
}

impl ReaderEvent {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Event codes sent by the card in a data frame body.
///
/// `Wtx` shares its numeric value with [`ReaderEvent::Abort`]; the
/// direction of the frame decides which one is meant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardEvent {
    Apdu = EVT_APDU,
    Wtx = EVT_WTX,
    Atr = EVT_ATR,
}

impl CardEvent {
    pub fn from_u8(b: u8) -> Option<Self> {
        match b {
            EVT_APDU => Some(Self::Apdu),
            EVT_WTX => Some(Self::Wtx),
            EVT_ATR => Some(Self::Atr),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this event carries the final answer of an exchange.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Apdu | Self::Atr)
    }
}
