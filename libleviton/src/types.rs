// libleviton/src/types.rs

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use derive_more::Display;

use crate::constants::{
    HEADER_LEN, SIGNATURE_LEN, SIGNATURE_OFFSET, STATE_OFF, STATE_ON, TYPE_DIMMER,
    TYPE_DIMMER_ALT, TYPE_RELAY,
};
use crate::Error;

/// Light name -> on/off, rebuilt on every poll. Lights without a matching
/// event are absent, which means "unknown", not "off".
pub type LightStateMap = BTreeMap<String, bool>;

/// Command vocabulary accepted by the dispatcher.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    #[display(fmt = "on")]
    On,
    #[display(fmt = "off")]
    Off,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::On => "on",
            CommandKind::Off => "off",
        }
    }
}

impl FromStr for CommandKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(CommandKind::On),
            "off" => Ok(CommandKind::Off),
            other => Err(Error::InvalidCommandKind(other.to_string())),
        }
    }
}

/// Decoded load state
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightState {
    #[display(fmt = "ON")]
    On,
    #[display(fmt = "OFF")]
    Off,
}

impl LightState {
    /// Map a header state flag; only 0x00 and 0x64 are valid.
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            STATE_OFF => Some(LightState::Off),
            STATE_ON => Some(LightState::On),
            _ => None,
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, LightState::On)
    }
}

/// Device family bucket derived from the header type code.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Relay,
    Dimmer,
    Unknown,
}

impl DeviceKind {
    pub fn from_type_code(code: u8) -> Self {
        match code {
            TYPE_RELAY => DeviceKind::Relay,
            TYPE_DIMMER | TYPE_DIMMER_ALT => DeviceKind::Dimmer,
            _ => DeviceKind::Unknown,
        }
    }

    /// Whether the record parser accepts this type code.
    pub fn is_known_code(code: u8) -> bool {
        !matches!(Self::from_type_code(code), DeviceKind::Unknown)
    }
}

/// Four-byte slice identifying a load, shared by feedback headers and
/// command frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    pub fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Signature of a command frame: bytes 8..12. Frames too short to carry
    /// all four bytes have none.
    pub fn from_command(command: &[u8]) -> Option<Self> {
        let slice = command.get(SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE_LEN)?;
        let mut arr = [0u8; SIGNATURE_LEN];
        arr.copy_from_slice(slice);
        Some(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_list(&self.0))
    }
}

/// Fixed 7-byte record header: sentinel, type code, four signature bytes
/// and the state flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header([u8; HEADER_LEN]);

impl Header {
    pub fn from_bytes(bytes: [u8; HEADER_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HEADER_LEN] {
        &self.0
    }

    pub fn type_code(&self) -> u8 {
        self.0[1]
    }

    pub fn device_kind(&self) -> DeviceKind {
        DeviceKind::from_type_code(self.type_code())
    }

    pub fn state_flag(&self) -> u8 {
        self.0[6]
    }

    /// header[1..5], compared against command signatures.
    pub fn signature(&self) -> Signature {
        let mut arr = [0u8; SIGNATURE_LEN];
        arr.copy_from_slice(&self.0[1..1 + SIGNATURE_LEN]);
        Signature(arr)
    }
}

impl TryFrom<&[u8]> for Header {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; HEADER_LEN] = bytes.try_into().map_err(|_| {
            Error::MalformedRecord(crate::RecordReject::TooShort {
                expected: HEADER_LEN,
                actual: bytes.len(),
            })
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_list(&self.0))
    }
}

/// A configured light and its raw command frames.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub on: Vec<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub off: Vec<u8>,
}

impl LightDefinition {
    pub fn new(name: impl Into<String>, on: Vec<u8>, off: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            on,
            off,
        }
    }

    /// Command bytes for `kind`; an empty sequence counts as undefined.
    pub fn command(&self, kind: CommandKind) -> Option<&[u8]> {
        let bytes = match kind {
            CommandKind::On => &self.on,
            CommandKind::Off => &self.off,
        };
        if bytes.is_empty() { None } else { Some(bytes) }
    }

    pub fn signature(&self, kind: CommandKind) -> Option<Signature> {
        self.command(kind).and_then(Signature::from_command)
    }
}
