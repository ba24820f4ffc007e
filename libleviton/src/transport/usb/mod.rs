// libleviton/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use rusb::{Context, DeviceHandle, TransferType, UsbContext};

use crate::constants::{IN_ENDPOINT, OUT_ENDPOINT};
use crate::transport::traits::{Connector, Transport};
use crate::utils::ms;
use crate::{Error, Result};

mod descriptor;
use descriptor::{EndpointInfo, find_endpoint};

/// rusb-backed transport for the lighting controller. One instance is
/// opened per poll session or command and reset afterwards.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    interface: u8,
    in_type: TransferType,
    out_type: TransferType,
}

impl UsbTransport {
    /// Open the controller with the given vendor/product id.
    pub fn open(vendor_id: u16, product_id: u16) -> Result<Self> {
        let ctx = Context::new()?;
        let mut handle = ctx
            .open_device_with_vid_pid(vendor_id, product_id)
            .ok_or(Error::DeviceNotFound {
                vendor_id,
                product_id,
            })?;

        let device = handle.device();
        let in_info = find_endpoint(&device, IN_ENDPOINT);
        let out_info = find_endpoint(&device, OUT_ENDPOINT);
        let interface = in_info.or(out_info).map_or(0, |i| i.interface);

        // The kernel HID driver may own the controller on Linux. Detach is
        // best-effort; claim_interface reports the hard failure.
        if let Ok(true) = handle.kernel_driver_active(interface) {
            if let Err(e) = handle.detach_kernel_driver(interface) {
                log::debug!("detach kernel driver failed: {}", e);
            }
        }

        if let Err(e) = handle.set_active_configuration(1) {
            log::debug!("set_active_configuration not needed or failed: {}", e);
        }

        handle.claim_interface(interface)?;

        let transfer_type = |info: Option<EndpointInfo>| {
            info.map_or(TransferType::Interrupt, |i| i.transfer_type)
        };

        Ok(UsbTransport {
            handle,
            interface,
            in_type: transfer_type(in_info),
            out_type: transfer_type(out_info),
        })
    }
}

impl Transport for UsbTransport {
    fn write(&mut self, endpoint: u8, data: &[u8], timeout_ms: u64) -> Result<usize> {
        let timeout = ms(timeout_ms);
        let written = match self.out_type {
            TransferType::Bulk => self.handle.write_bulk(endpoint, data, timeout)?,
            _ => self.handle.write_interrupt(endpoint, data, timeout)?,
        };
        Ok(written)
    }

    fn read(&mut self, endpoint: u8, length: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        let timeout = ms(timeout_ms);
        let mut buf = vec![0u8; length];
        let result = match self.in_type {
            TransferType::Bulk => self.handle.read_bulk(endpoint, &mut buf, timeout),
            _ => self.handle.read_interrupt(endpoint, &mut buf, timeout),
        };
        match result {
            Ok(n) => {
                buf.truncate(n);
                Ok(buf)
            }
            Err(rusb::Error::Overflow) => Err(Error::TransientOverflow),
            Err(rusb::Error::Timeout) => Err(Error::Timeout),
            Err(e) => Err(e.into()),
        }
    }

    fn reset(&mut self) -> Result<()> {
        if let Err(e) = self.handle.release_interface(self.interface) {
            log::debug!("release interface {} failed: {}", self.interface, e);
        }
        self.handle.reset()?;
        Ok(())
    }
}

/// Connector opening a [`UsbTransport`] by vendor/product id.
#[derive(Debug, Clone, Copy)]
pub struct UsbConnector {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl UsbConnector {
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

impl Connector for UsbConnector {
    fn open(&self) -> Result<Box<dyn Transport>> {
        let transport = UsbTransport::open(self.vendor_id, self.product_id).inspect_err(|e| {
            if matches!(e, Error::DeviceNotFound { .. }) {
                log::warn!(
                    "usb device {:04x}:{:04x} not found",
                    self.vendor_id,
                    self.product_id
                );
            }
        })?;
        Ok(Box::new(transport))
    }
}
