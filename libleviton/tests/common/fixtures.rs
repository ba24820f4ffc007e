// fixtures.rs: a captured-style poll session and the lights it refers to

use libleviton::LightDefinition;
use libleviton::test_support::{command_frame, feedback_report};

pub const KITCHEN_ON: [u8; 4] = [0x26, 0x01, 0x0A, 0x0B];
pub const KITCHEN_OFF: [u8; 4] = [0x26, 0x01, 0x0A, 0x0C];
pub const DEN_ON: [u8; 4] = [0x1E, 0x02, 0x0C, 0x0E];
pub const DEN_OFF: [u8; 4] = [0x1E, 0x02, 0x0C, 0x0D];
pub const GARAGE_ON: [u8; 4] = [0x26, 0x07, 0x07, 0x01];
pub const GARAGE_OFF: [u8; 4] = [0x26, 0x07, 0x07, 0x02];

/// Report payloads of one session, in read order. The kitchen record is
/// split over two reports, the den record has an unprintable label and the
/// fourth record has no sentinel.
pub const SESSION_PAYLOADS: [&str; 4] = [
    "007e26010a0b00644b69",
    "7463ff68656e",
    "007e1e020c0d00000102",
    "00123456",
];

/// Payload of the idle report the controller repeats once it is done.
pub const IDLE_PAYLOAD: &str = "";

pub fn session_reports() -> Vec<Vec<u8>> {
    let mut reports: Vec<Vec<u8>> = SESSION_PAYLOADS
        .iter()
        .enumerate()
        .map(|(i, p)| feedback_report(i as u8 + 1, &hex::decode(p).unwrap()))
        .collect();
    for _ in 0..4 {
        reports.push(idle_report());
    }
    reports
}

pub fn idle_report() -> Vec<u8> {
    feedback_report(0x05, &hex::decode(IDLE_PAYLOAD).unwrap())
}

pub fn lights() -> Vec<LightDefinition> {
    vec![
        LightDefinition::new("Kitchen", command_frame(KITCHEN_ON), command_frame(KITCHEN_OFF)),
        LightDefinition::new("Den (Väst)", command_frame(DEN_ON), command_frame(DEN_OFF)),
        LightDefinition::new("Garage", command_frame(GARAGE_ON), command_frame(GARAGE_OFF)),
        LightDefinition::new("Porch", command_frame([0x26, 0x09, 0x09, 0x09]), vec![]),
    ]
}
