// libleviton/src/protocol/mod.rs

//! Feedback decoding: report cleaning, record assembly, record parsing and
//! label resolution.

pub mod assembler;
pub mod codec;
pub mod label;
pub mod parser;
pub mod record;
pub mod report;

pub use assembler::assemble_records;
pub use codec::{Decoded, decode_reports};
pub use label::LabelCounters;
pub use record::{ParsedEvent, parse_record, render_label};
pub use report::{clean_report, significant_payload};
