// libleviton/src/protocol/assembler.rs

use crate::constants::RECORD_START;

/// Group cleaned report payloads into combined records.
///
/// A non-empty sequence whose first byte is 0x00 closes the record being
/// built and starts a new one; any other sequence (including an empty one)
/// is appended to the current record. Records come out in discovery order
/// and are never empty.
pub fn assemble_records<I, S>(sequences: I) -> Vec<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut records = Vec::new();
    let mut current: Vec<u8> = Vec::new();

    for seq in sequences {
        let seq = seq.as_ref();
        if seq.first() == Some(&RECORD_START) && !current.is_empty() {
            records.push(std::mem::take(&mut current));
        }
        current.extend_from_slice(seq);
    }

    if !current.is_empty() {
        records.push(current);
    }
    records
}
