// Shared helpers for the integration tests in `tests/`.
#![allow(dead_code)]

pub mod fixtures;

pub use ndlc::test_support as helpers;

use std::cell::RefCell;
use std::rc::Rc;

use ndlc::device::{Device, Initialized};
use ndlc::transport::Transport;
use ndlc::transport::mock::MockTransport;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Transport wrapper that delegates into Rc<RefCell<MockTransport>> so a
/// test can keep inspecting the mock after the Device owns the transport.
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl Transport for SharedTransport {
    fn transceive(&mut self, tx: &[u8], rx: &mut [u8]) -> ndlc::Result<usize> {
        self.inner.borrow_mut().transceive(tx, rx)
    }

    fn power(&mut self, on: bool) -> ndlc::Result<()> {
        self.inner.borrow_mut().power(on)
    }

    fn reset(&mut self) -> ndlc::Result<()> {
        self.inner.borrow_mut().reset()
    }
}

/// Initialized device over a shared mock seeded with `replies`.
pub fn shared_mock_device(
    replies: Vec<Vec<u8>>,
) -> (Device<Initialized>, Rc<RefCell<MockTransport>>) {
    init_logger();
    let inner = Rc::new(RefCell::new(helpers::mock_with_replies(replies)));
    let boxed: Box<dyn Transport> = Box::new(SharedTransport {
        inner: inner.clone(),
    });
    let device = Device::new_with_transport(boxed)
        .initialize()
        .expect("initialize");
    (device, inner)
}
