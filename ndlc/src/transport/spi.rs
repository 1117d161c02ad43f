// ndlc/src/transport/spi.rs

//! SPI transport on top of `embedded-hal` 1.0.
//!
//! Each `transceive` is a single [`SpiDevice::transfer`]. The `SpiDevice`
//! implementation owns chip-select timing and, when the bus is shared with
//! other peripherals (e.g. `embedded-hal-bus`), bus arbitration. Nothing
//! of that leaks into the NDLC engine.

use embedded_hal::spi::{Error as _, SpiDevice};

use crate::transport::traits::Transport;
use crate::{Error, Result};

pub struct SpiTransport<D> {
    device: D,
}

impl<D: SpiDevice> SpiTransport<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// Give the underlying SPI device back.
    pub fn release(self) -> D {
        self.device
    }
}

impl<D: SpiDevice> Transport for SpiTransport<D> {
    fn transceive(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<usize> {
        if rx.len() < tx.len() {
            return Err(Error::ShortTransfer {
                expected: tx.len(),
                actual: rx.len(),
            });
        }
        let rx = &mut rx[..tx.len()];

        self.device
            .transfer(rx, tx)
            .map_err(|e| Error::Transport(format!("spi {:?}", e.kind())))?;

        Ok(tx.len())
    }
}
