//! APDU session against a simulated secure element.
//!
//! Usage:
//!   RUST_LOG=ndlc=trace cargo run -p ndlc --example apdu_session

use std::collections::VecDeque;

use ndlc::constants::*;
use ndlc::prelude::*;

/// Card simulator: latches every command frame, asks for two wait-time
/// extensions, then answers an APDU with `90 00` and an abort with an ATR.
struct SimulatedCard {
    pending: VecDeque<Vec<u8>>,
}

impl SimulatedCard {
    fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    fn latch(&mut self, frame: &[u8]) {
        let (event, answer): (u8, &[u8]) = match frame[3] {
            EVT_ABORT => (EVT_ATR, &[0x3B, 0x8F, 0x80, 0x01]),
            _ => (EVT_APDU, &[0x90, 0x00]),
        };

        self.pending.push_back(vec![PCB_ACK, 0x00]);
        for _ in 0..2 {
            self.pending.push_back(vec![PCB_DATA, 0x02]);
            self.pending.push_back(vec![PCB_ACK, EVT_WTX]);
        }
        self.pending
            .push_back(vec![PCB_DATA, (answer.len() + DATA_PAYLOAD_OFFSET) as u8]);
        let mut body = vec![PCB_ACK, event];
        body.extend_from_slice(answer);
        self.pending.push_back(body);
    }
}

impl Transport for SimulatedCard {
    fn transceive(&mut self, tx: &[u8], rx: &mut [u8]) -> ndlc::Result<usize> {
        rx.fill(DUMMY);
        if tx.len() >= COMMAND_HEADER_LEN && tx[0] == PCB_DATA && tx[2] == READER_ADDRESS {
            self.latch(tx);
        } else if tx[0] != PCB_ACK {
            if let Some(reply) = self.pending.pop_front() {
                let n = reply.len().min(rx.len());
                rx[..n].copy_from_slice(&reply[..n]);
            }
        }
        Ok(tx.len())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut device = DeviceBuilder::new()
        .with_transport(Box::new(SimulatedCard::new()))
        .build()?;

    let atr = device.atr()?;
    println!("ATR: {}", bytes_to_hex_spaced(&atr));

    let select = parse_hex("00 A4 04 00 07 A0 00 00 01 51 00 00").map_err(anyhow::Error::msg)?;
    let resp = device.apdu(&select)?;
    println!("SELECT -> {}", bytes_to_hex_spaced(&resp));

    let device = device.deinitialize()?;
    println!("link state after teardown: {}", device.status());
    Ok(())
}
