// libleviton/src/protocol/parser.rs

use crate::RecordReject;
use crate::constants::RECORD_SENTINEL;

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<(), RecordReject> {
    if data.len() < min {
        return Err(RecordReject::TooShort {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8, RecordReject> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Slice starting at the first sentinel byte, dropping everything before it.
pub fn from_sentinel(data: &[u8]) -> Result<&[u8], RecordReject> {
    data.iter()
        .position(|&b| b == RECORD_SENTINEL)
        .map(|idx| &data[idx..])
        .ok_or(RecordReject::SentinelNotFound)
}
