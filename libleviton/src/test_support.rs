//! Test support helpers intended for use by unit and integration tests.
//!
//! These build feedback reports, status records and command frames in the
//! layout the controller uses, so tests across the crate and the tests/
//! directory share one definition.
#![allow(dead_code)]

use crate::constants::{
    FILLER_BYTE, RECORD_SENTINEL, RECORD_START, REPORT_SIZE, SIGNATURE_LEN, SIGNATURE_OFFSET,
};
use crate::controller::Controller;
use crate::transport::{MockConnector, MockTransport};
use crate::types::LightDefinition;

/// A 64-byte feedback report carrying `payload`, padded with filler.
#[doc(hidden)]
pub fn feedback_report(marker: u8, payload: &[u8]) -> Vec<u8> {
    assert!(payload.len() <= REPORT_SIZE - 2, "payload does not fit a report");
    let mut report = Vec::with_capacity(REPORT_SIZE);
    report.push(marker);
    report.push(payload.len() as u8);
    report.extend_from_slice(payload);
    report.resize(REPORT_SIZE, FILLER_BYTE);
    report
}

/// A status record as it appears in a cleaned report: record start, the
/// 7-byte header built from `signature` and `flag`, then the label bytes.
#[doc(hidden)]
pub fn status_record(signature: [u8; SIGNATURE_LEN], flag: u8, label: &[u8]) -> Vec<u8> {
    let mut record = vec![RECORD_START, RECORD_SENTINEL];
    record.extend_from_slice(&signature);
    record.push(0x00);
    record.push(flag);
    record.extend_from_slice(label);
    record
}

/// A command frame whose bytes 8..12 carry `signature`.
#[doc(hidden)]
pub fn command_frame(signature: [u8; SIGNATURE_LEN]) -> Vec<u8> {
    let mut frame = vec![0x00; SIGNATURE_OFFSET];
    frame[0] = 0x01;
    frame[1] = 0x0E;
    frame.extend_from_slice(&signature);
    frame.extend_from_slice(&[0x00, 0x00]);
    frame
}

/// A light whose on/off frames carry the given signatures.
#[doc(hidden)]
pub fn light(name: &str, on: [u8; SIGNATURE_LEN], off: [u8; SIGNATURE_LEN]) -> LightDefinition {
    LightDefinition::new(name, command_frame(on), command_frame(off))
}

/// Controller backed by a fresh MockTransport; the transport handle is
/// returned so tests can queue reports and inspect writes.
#[doc(hidden)]
pub fn mock_controller(lights: Vec<LightDefinition>) -> (Controller, MockTransport) {
    let mock = MockTransport::new();
    let controller = Controller::new(
        Box::new(MockConnector::new(mock.clone())),
        lights.into(),
        vec![0x00, 0x05, 0x7E, 0x01],
        crate::utils::DEFAULT_IO_TIMEOUT_MS,
    );
    (controller, mock)
}
