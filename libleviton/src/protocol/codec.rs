// libleviton/src/protocol/codec.rs

use log::debug;

use super::assembler::assemble_records;
use super::label::LabelCounters;
use super::record::{ParsedEvent, parse_record};
use super::report::clean_report;
use crate::utils::bytes_to_hex_list;

/// Output of decoding one poll session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Combined records in discovery order.
    pub records: Vec<Vec<u8>>,
    /// Events for every record that passed validation, labels resolved.
    pub events: Vec<ParsedEvent>,
    /// Records dropped by validation.
    pub rejected: usize,
}

/// Clean, assemble, classify and label the raw reports of a session.
/// Malformed records are dropped and counted, never reported as errors.
pub fn decode_reports<R: AsRef<[u8]>>(reports: &[R], labels: &mut LabelCounters) -> Decoded {
    let cleaned: Vec<Vec<u8>> = reports.iter().map(|r| clean_report(r.as_ref())).collect();
    let records = assemble_records(&cleaned);

    let mut events = Vec::with_capacity(records.len());
    let mut rejected = 0usize;
    for record in &records {
        match parse_record(record) {
            Ok(mut event) => {
                labels.resolve_event(&mut event);
                debug!(
                    "record {}: state={} label={}",
                    event.header, event.state, event.label
                );
                events.push(event);
            }
            Err(reason) => {
                debug!("dropping record [{}]: {}", bytes_to_hex_list(record), reason);
                rejected += 1;
            }
        }
    }

    Decoded {
        records,
        events,
        rejected,
    }
}
