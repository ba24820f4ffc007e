// libleviton/src/transport/usb/descriptor.rs

use rusb::{Device, TransferType, UsbContext};

/// Where an endpoint lives and how it transfers data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointInfo {
    pub interface: u8,
    pub transfer_type: TransferType,
}

/// Inspect the active configuration descriptor and return the interface
/// and transfer type of the endpoint with the given address, if present.
pub fn find_endpoint<T: UsbContext>(device: &Device<T>, address: u8) -> Option<EndpointInfo> {
    let config = device
        .active_config_descriptor()
        .or_else(|_| device.config_descriptor(0))
        .ok()?;

    for interface in config.interfaces() {
        for interface_desc in interface.descriptors() {
            for endpoint_desc in interface_desc.endpoint_descriptors() {
                if endpoint_desc.address() == address {
                    return Some(EndpointInfo {
                        interface: interface_desc.interface_number(),
                        transfer_type: endpoint_desc.transfer_type(),
                    });
                }
            }
        }
    }

    None
}
