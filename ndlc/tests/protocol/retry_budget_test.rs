#[path = "../common/mod.rs"]
mod common;

use ndlc::constants::{DUMMY, MAX_APDU_LEN, MAX_RETRIES, RESPONSE_BUFFER_LEN};
use ndlc::protocol::{Command, Exchange};
use ndlc::transport::mock::MockTransport;
use ndlc::{Error, LinkState};
use proptest::prelude::*;

fn exchange(mock: &mut MockTransport, command: &[u8]) -> ndlc::Result<Vec<u8>> {
    let mut status = LinkState::Idle;
    let mut rx = [0u8; RESPONSE_BUFFER_LEN];
    let len = Exchange::new(mock, &mut status, &mut rx, MAX_RETRIES).run(command)?;
    Ok(rx[2..2 + len].to_vec())
}

#[test]
fn silent_card_exhausts_budget_exactly() {
    common::init_logger();
    let mut mock = MockTransport::new();
    let err = exchange(&mut mock, &Command::Abort.encode().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        Error::Exhausted {
            retries: 100,
            state: LinkState::SendCmd
        }
    ));
    assert_eq!(mock.transfers(), 100);
}

#[test]
fn progress_resets_the_shared_counter() {
    // 99 stalls in every polling state still succeed: each step of
    // progress starts a fresh budget.
    let answer = common::fixtures::sw_ok();
    let replies = common::helpers::happy_path_replies(&answer);
    let mut mock = MockTransport::new();

    mock.push_response(replies[0].clone());
    for _ in 0..99 {
        mock.push_response(vec![0x00, 0x00]);
    }
    mock.push_response(replies[1].clone());
    for _ in 0..99 {
        mock.push_failure();
    }
    mock.push_response(replies[2].clone());
    for _ in 0..99 {
        mock.push_response(vec![0xE0]);
    }
    mock.push_response(replies[3].clone());
    for _ in 0..99 {
        mock.push_response(vec![0x12, 0x34]);
    }
    mock.push_response(replies[4].clone());

    let resp = exchange(&mut mock, &Command::Abort.encode().unwrap()).unwrap();
    assert_eq!(resp, answer);
}

proptest! {
    #[test]
    fn unlatched_command_always_exhausts(first in any::<u8>().prop_filter("not dummy", |b| *b != DUMMY)) {
        let mut mock = MockTransport::new();
        mock.set_fallback(vec![first; RESPONSE_BUFFER_LEN]);
        let res = exchange(&mut mock, &Command::Abort.encode().unwrap());
        let exhausted = matches!(res, Err(Error::Exhausted { .. }));
        prop_assert!(exhausted);
        prop_assert_eq!(mock.transfers(), MAX_RETRIES as usize);
    }

    #[test]
    fn any_sized_apdu_roundtrips(apdu in prop::collection::vec(any::<u8>(), 0..=MAX_APDU_LEN)) {
        let mut mock = common::helpers::mock_with_replies(common::helpers::happy_path_replies(&apdu));
        let frame = Command::Apdu(apdu.clone()).encode().unwrap();
        let resp = exchange(&mut mock, &frame).unwrap();
        prop_assert_eq!(resp, apdu);
        prop_assert_eq!(&mock.sent[0], &frame);
    }
}
