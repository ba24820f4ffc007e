use crate::common::fixtures;

use libleviton::protocol::{LabelCounters, assemble_records, clean_report, decode_reports};
use libleviton::{LightState, RecordReject};

#[test]
fn cleaning_drops_prefix_and_filler() {
    let reports = fixtures::session_reports();
    assert_eq!(clean_report(&reports[1]), b"tchen".to_vec());
    assert!(clean_report(&fixtures::idle_report()).is_empty());
}

#[test]
fn split_record_is_reassembled() {
    let cleaned: Vec<Vec<u8>> = fixtures::session_reports()
        .iter()
        .map(|r| clean_report(r))
        .collect();
    let records = assemble_records(&cleaned);

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        hex::decode("007e26010a0b00644b69746368656e").unwrap()
    );
}

#[test]
fn session_decodes_to_events() {
    let mut labels = LabelCounters::new();
    let decoded = decode_reports(&fixtures::session_reports(), &mut labels);

    assert_eq!(decoded.records.len(), 3);
    assert_eq!(decoded.rejected, 1);
    assert_eq!(decoded.events.len(), 2);

    let kitchen = &decoded.events[0];
    assert_eq!(kitchen.state, LightState::On);
    assert_eq!(kitchen.header.type_code(), 0x26);
    assert_eq!(kitchen.label, "Kitchen");

    let den = &decoded.events[1];
    assert_eq!(den.state, LightState::Off);
    assert_eq!(den.label, "Dimmer1");
}

#[test]
fn labels_keep_counting_between_sessions() {
    let mut labels = LabelCounters::new();
    decode_reports(&fixtures::session_reports(), &mut labels);
    let second = decode_reports(&fixtures::session_reports(), &mut labels);
    assert_eq!(second.events[1].label, "Dimmer2");
}

#[test]
fn reject_reason_for_missing_sentinel() {
    let record = hex::decode("00123456").unwrap();
    assert_eq!(
        libleviton::protocol::parse_record(&record),
        Err(RecordReject::SentinelNotFound)
    );
}
