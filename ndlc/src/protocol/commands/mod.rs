// ndlc/src/protocol/commands/mod.rs

use crate::Result;
use crate::protocol::frame::CommandFrame;
use crate::types::ReaderEvent;

/// Application commands a reader can issue over NDLC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Abort the current session; the card answers with its ATR.
    Abort,
    /// Forward an opaque APDU to the card.
    Apdu(Vec<u8>),
}

impl Command {
    pub fn event(&self) -> ReaderEvent {
        match self {
            Self::Abort => ReaderEvent::Abort,
            Self::Apdu(_) => ReaderEvent::Apdu,
        }
    }

    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Abort => &[],
            Self::Apdu(apdu) => apdu.as_slice(),
        }
    }

    /// Encode into a full command frame ready for the engine.
    pub fn encode(&self) -> Result<Vec<u8>> {
        CommandFrame::encode(self.event(), self.payload())
    }
}
