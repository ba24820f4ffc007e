// libleviton/src/error.rs

use thiserror::Error;

/// Reason a combined record was rejected by the record parser.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordReject {
    #[error("sentinel byte 0x7e not found")]
    SentinelNotFound,

    #[error("record too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("unknown device type code {0:#04x}")]
    UnknownDeviceType(u8),

    #[error("unknown state flag {0:#04x}")]
    UnknownStateFlag(u8),
}

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("usb device {vendor_id:04x}:{product_id:04x} not found")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },

    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    #[error("usb read buffer overflow")]
    TransientOverflow,

    #[error("transport fault: {0}")]
    TransportFault(String),

    #[error("operation timed out")]
    Timeout,

    #[error("short write: expected {expected} bytes, wrote {actual}")]
    ShortWrite { expected: usize, actual: usize },

    #[error("unknown light: {0}")]
    UnknownLight(String),

    #[error("light '{light}' does not define command '{kind}'")]
    UndefinedCommand {
        light: String,
        kind: crate::types::CommandKind,
    },

    #[error("invalid command kind: {0}")]
    InvalidCommandKind(String),

    #[error("malformed record: {0}")]
    MalformedRecord(#[from] RecordReject),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the poll session may skip this error and keep reading.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::TransientOverflow => true,
            #[cfg(feature = "usb")]
            Error::Usb(rusb::Error::Overflow) => true,
            _ => false,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
