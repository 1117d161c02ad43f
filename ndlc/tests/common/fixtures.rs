// fixtures.rs — commonly used APDUs and card answers

/// SELECT by AID
pub fn select_apdu() -> Vec<u8> {
    hex::decode("00a4040007a000000151000000").unwrap()
}

/// GET CHALLENGE, 8 bytes
pub fn get_challenge_apdu() -> Vec<u8> {
    hex::decode("0084000008").unwrap()
}

/// Status word "success"
pub fn sw_ok() -> Vec<u8> {
    hex::decode("9000").unwrap()
}

/// Challenge response: 8 random bytes then 90 00
pub fn challenge_response() -> Vec<u8> {
    hex::decode("11223344556677889000").unwrap()
}

pub fn sample_atr() -> Vec<u8> {
    hex::decode("3b8f8001804f0ca000000306030000000068").unwrap()
}

/// The abort frame as it must appear on the wire.
pub fn abort_frame() -> Vec<u8> {
    vec![0x80, 0x02, 0xE0, 0x51]
}

/// Expected command frame for an APDU.
pub fn apdu_frame(apdu: &[u8]) -> Vec<u8> {
    let mut frame = vec![0x80, (apdu.len() + 2) as u8, 0xE0, 0x50];
    frame.extend_from_slice(apdu);
    frame
}
