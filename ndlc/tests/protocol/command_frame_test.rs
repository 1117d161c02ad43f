#[path = "../common/mod.rs"]
mod common;

use ndlc::protocol::{Command, DataBody, DataHeader};
use ndlc::types::CardEvent;

#[test]
fn abort_and_apdu_frames_match_wire_format() {
    assert_eq!(
        Command::Abort.encode().unwrap(),
        common::fixtures::abort_frame()
    );

    let apdu = common::fixtures::select_apdu();
    let frame = Command::Apdu(apdu.clone()).encode().unwrap();
    assert_eq!(frame, common::fixtures::apdu_frame(&apdu));
    assert_eq!(frame[1] as usize, apdu.len() + 2);
}

#[test]
fn scripted_card_frames_parse() {
    let answer = common::fixtures::challenge_response();
    let replies = common::helpers::happy_path_replies(&answer);

    let header = DataHeader::parse(&replies[2]).expect("data header");
    assert_eq!(header.len as usize, answer.len() + 2);

    match DataBody::parse(&replies[3]) {
        Some(DataBody::Final { event, payload }) => {
            assert_eq!(event, CardEvent::Apdu);
            assert_eq!(payload, &answer[..]);
        }
        other => panic!("expected final body, got {:?}", other),
    }

    let [wtx_header, wtx_body] = common::helpers::wtx_round();
    assert_eq!(DataHeader::parse(&wtx_header).map(|h| h.len), Some(2));
    assert_eq!(DataBody::parse(&wtx_body), Some(DataBody::Wtx));
}
