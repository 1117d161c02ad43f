#[path = "../common/mod.rs"]
mod common;

use ndlc::device::{Device, DeviceBuilder};
use ndlc::transport::mock::MockTransport;
use ndlc::LinkState;

#[test]
fn initialize_and_deinitialize_reset_status() {
    let boxed: Box<dyn ndlc::transport::Transport> = Box::new(MockTransport::new());
    let device = Device::new_with_transport(boxed);
    assert_eq!(device.status(), LinkState::Idle);

    let initialized = device.initialize().unwrap();
    assert_eq!(initialized.status(), LinkState::Idle);
    assert_eq!(initialized.response_len(), 0);

    let back = initialized.deinitialize().unwrap();
    assert_eq!(back.status(), LinkState::Idle);
}

#[test]
fn deinitialize_after_failed_exchange_returns_to_idle() {
    // Latch and ACK, then the card goes silent while we wait for a header.
    let (mut dev, mock) = common::shared_mock_device(vec![
        common::helpers::latched(),
        vec![0xE0, 0x00],
    ]);
    assert!(dev.abort().is_err());
    assert_eq!(dev.status(), LinkState::ReadHeader);

    let dev = dev.deinitialize().unwrap();
    assert_eq!(dev.status(), LinkState::Idle);
    assert_eq!(mock.borrow().power_calls, vec![true, false]);
}

#[test]
fn builder_applies_retry_budget() {
    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(MockTransport::new()))
        .with_max_retries(7)
        .build()
        .unwrap();
    match dev.abort() {
        Err(ndlc::Error::Exhausted { retries, state }) => {
            assert_eq!(retries, 7);
            assert_eq!(state, LinkState::SendCmd);
        }
        other => panic!("expected exhausted, got {:?}", other),
    }
}
