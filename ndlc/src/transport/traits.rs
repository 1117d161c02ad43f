// ndlc/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the physical link away from the NDLC engine.
///
/// A transport is a pure byte shuttle: every call clocks `tx.len()` bytes
/// out and the same number of bytes in. It knows nothing about framing.
pub trait Transport {
    /// Full-duplex exchange of `tx.len()` bytes. `rx` has the same length
    /// as `tx`. Returns the number of bytes actually exchanged; a value
    /// lower than `tx.len()` is a short transfer.
    fn transceive(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<usize>;

    /// Switch the peripheral supply on or off. Transports without power
    /// control treat this as a no-op.
    fn power(&mut self, _on: bool) -> Result<()> {
        Ok(())
    }

    /// Perform a transport-level reset
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transceive(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<usize> {
        (**self).transceive(tx, rx)
    }

    fn power(&mut self, on: bool) -> Result<()> {
        (**self).power(on)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transceive(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<usize> {
        (**self).transceive(tx, rx)
    }

    fn power(&mut self, on: bool) -> Result<()> {
        (**self).power(on)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
