// libleviton/src/constants.rs
//! Wire constants for the Leviton USB lighting controller

/// Interrupt OUT endpoint used for commands and the poll trigger
pub const OUT_ENDPOINT: u8 = 0x01;

/// Interrupt IN endpoint delivering feedback reports
pub const IN_ENDPOINT: u8 = 0x81;

/// Size of a single feedback report in bytes
pub const REPORT_SIZE: usize = 64;

/// Padding byte filling unused report positions
pub const FILLER_BYTE: u8 = 0xFF;

/// A cleaned sequence starting with this byte opens a new record
pub const RECORD_START: u8 = 0x00;

/// Marks the start of a record header
pub const RECORD_SENTINEL: u8 = 0x7E;

/// Device type codes found at header[1]
pub const TYPE_RELAY: u8 = 0x26;
pub const TYPE_DIMMER: u8 = 0x1E;
pub const TYPE_DIMMER_ALT: u8 = 0x2E;

/// State flags found at header[6]
pub const STATE_OFF: u8 = 0x00;
pub const STATE_ON: u8 = 0x64;

/// Length of the fixed record header (sentinel through state flag)
pub const HEADER_LEN: usize = 7;

/// Maximum length of a decoded device label
pub const LABEL_MAX_LEN: usize = 15;

/// Offset and length of the signature inside a light's command frame
pub const SIGNATURE_OFFSET: usize = 8;
pub const SIGNATURE_LEN: usize = 4;

/// Number of consecutive identical reports that ends a poll session
pub const DUPLICATE_LIMIT: usize = 4;
