// libleviton/src/protocol/record.rs

//! Record classification.
//!
//! A valid record, after any bytes preceding the sentinel are dropped:
//! [0x7E] [Type(1)] [Signature tail(3)] [Reserved(1)] [State(1)] [Label ...]
//! Type is 0x26 (relay) or 0x1E/0x2E (dimmer); State is 0x00 or 0x64.

use crate::constants::{HEADER_LEN, LABEL_MAX_LEN};
use crate::protocol::parser::{byte_at, ensure_len, from_sentinel};
use crate::types::{DeviceKind, Header, LightState};
use crate::RecordReject;

/// A validated device status record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub state: LightState,
    pub header: Header,
    /// Label candidate from the trailing bytes; replaced by the resolved
    /// label once it passes through [`crate::protocol::LabelCounters`].
    pub label: String,
    /// Number of bytes that followed the header.
    pub payload_len: usize,
}

impl ParsedEvent {
    /// A record carrying only the header is informational: it still gets a
    /// label but does not take part in state reconciliation.
    pub fn is_header_only(&self) -> bool {
        self.payload_len == 0
    }

    pub fn device_kind(&self) -> DeviceKind {
        self.header.device_kind()
    }
}

/// Validate and decode one combined record.
pub fn parse_record(record: &[u8]) -> Result<ParsedEvent, RecordReject> {
    let data = from_sentinel(record)?;

    let type_code = byte_at(data, 1)?;
    if !DeviceKind::is_known_code(type_code) {
        return Err(RecordReject::UnknownDeviceType(type_code));
    }

    ensure_len(data, HEADER_LEN)?;
    let state = LightState::from_flag(data[6]).ok_or(RecordReject::UnknownStateFlag(data[6]))?;

    let mut header = [0u8; HEADER_LEN];
    header.copy_from_slice(&data[..HEADER_LEN]);
    let trailing = &data[HEADER_LEN..];

    Ok(ParsedEvent {
        state,
        header: Header::from_bytes(header),
        label: render_label(trailing),
        payload_len: trailing.len(),
    })
}

/// Printable label from trailing record bytes: non-printable bytes become
/// '.', only ASCII alphanumerics and '.' survive, surrounding dots are
/// trimmed and the result is cut to 15 characters.
pub fn render_label(trailing: &[u8]) -> String {
    let filtered: String = trailing
        .iter()
        .map(|&b| if (0x20..=0x7E).contains(&b) { b as char } else { '.' })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect();

    filtered
        .trim_matches(|c: char| c == '.' || c == ' ')
        .chars()
        .take(LABEL_MAX_LEN)
        .collect()
}
