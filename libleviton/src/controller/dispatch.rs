// libleviton/src/controller/dispatch.rs

use crate::constants::OUT_ENDPOINT;
use crate::transport::Transport;
use crate::{Error, Result};

/// Write a complete command frame to the OUT endpoint. Succeeds only when
/// the device accepted every byte.
pub fn write_command(transport: &mut dyn Transport, command: &[u8], timeout_ms: u64) -> Result<()> {
    let written = transport.write(OUT_ENDPOINT, command, timeout_ms)?;
    if written != command.len() {
        return Err(Error::ShortWrite {
            expected: command.len(),
            actual: written,
        });
    }
    Ok(())
}
