// libleviton/src/protocol/report.rs

//! Report cleaning.
//!
//! A feedback report is laid out as:
//! [Marker(1)] [Count(1)] [Payload(count)] [Filler ...]
//! Filler is 0xFF and may also appear inside the declared payload, where it
//! is dropped as well.

use crate::constants::FILLER_BYTE;

/// Declared significant payload of a report: `count` bytes after the two
/// prefix bytes, clamped to what the report actually holds. Reports shorter
/// than the prefix have no payload.
pub fn significant_payload(report: &[u8]) -> &[u8] {
    if report.len() < 2 {
        return &[];
    }
    let count = report[1] as usize;
    let end = (2 + count).min(report.len());
    &report[2..end]
}

/// Clean one report: declared payload with every filler byte removed.
pub fn clean_report(report: &[u8]) -> Vec<u8> {
    significant_payload(report)
        .iter()
        .copied()
        .filter(|&b| b != FILLER_BYTE)
        .collect()
}
