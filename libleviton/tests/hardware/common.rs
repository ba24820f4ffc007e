#![cfg(feature = "usb")]

//! Shared helpers for tests that talk to a real controller.
//!
//! The device ids come from `LEVITON_VID` / `LEVITON_PID` (hex, with or
//! without `0x`). When they are unset or no device is attached the helpers
//! return `Ok(None)` so the tests pass on machines without hardware.

use libleviton::transport::UsbTransport;
use libleviton::{Error, Result};

fn env_id(key: &str) -> Option<u16> {
    let raw = std::env::var(key).ok()?;
    u16::from_str_radix(raw.trim_start_matches("0x"), 16).ok()
}

pub fn device_ids() -> Option<(u16, u16)> {
    Some((env_id("LEVITON_VID")?, env_id("LEVITON_PID")?))
}

pub fn open_transport() -> Result<Option<UsbTransport>> {
    let Some((vid, pid)) = device_ids() else {
        return Ok(None);
    };
    match UsbTransport::open(vid, pid) {
        Ok(t) => Ok(Some(t)),
        Err(Error::DeviceNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
