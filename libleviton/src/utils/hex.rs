//! Hexadecimal helpers used for log output and signature comparison.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Render bytes as a comma separated list of `0xHH` literals, the format the
/// controller's captured command frames are written in.
///
/// Example: `&[0x7e, 0x26]` -> `"0x7E, 0x26"`
pub fn bytes_to_hex_list(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 6);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push_str(", ");
        }
        let _ = write!(&mut s, "0x{:02X}", b);
    }
    s
}
