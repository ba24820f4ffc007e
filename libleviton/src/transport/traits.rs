// libleviton/src/transport/traits.rs

use std::ops::{Deref, DerefMut};

use crate::Result;

/// Transport trait abstracts the USB handle away from session and command
/// logic.
pub trait Transport {
    /// Write raw bytes to `endpoint`, returning how many were accepted.
    fn write(&mut self, endpoint: u8, data: &[u8], timeout_ms: u64) -> Result<usize>;

    /// Read up to `length` bytes from `endpoint`.
    ///
    /// A read-buffer overflow must be reported as an error for which
    /// [`crate::Error::is_transient`] returns true.
    fn read(&mut self, endpoint: u8, length: usize, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Reset the device and release claimed resources. Called once at the
    /// end of every poll session and command.
    fn reset(&mut self) -> Result<()>;
}

/// Opens a fresh transport for each operation.
pub trait Connector: Send + Sync {
    fn open(&self) -> Result<Box<dyn Transport>>;
}

/// Owns an open transport for the duration of one operation and resets it
/// when dropped, whichever way the operation exits.
pub struct ResetOnDrop {
    transport: Box<dyn Transport>,
}

impl ResetOnDrop {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }
}

impl Deref for ResetOnDrop {
    type Target = dyn Transport;

    fn deref(&self) -> &Self::Target {
        &*self.transport
    }
}

impl DerefMut for ResetOnDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.transport
    }
}

impl Drop for ResetOnDrop {
    fn drop(&mut self) {
        if let Err(e) = self.transport.reset() {
            log::error!("failed to reset usb device: {}", e);
        }
    }
}
