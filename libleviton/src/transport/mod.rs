// libleviton/src/transport/mod.rs

//! USB access behind the [`Transport`] trait.

pub mod mock;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::{MockConnector, MockTransport};
pub use traits::{Connector, ResetOnDrop, Transport};
#[cfg(feature = "usb")]
pub use usb::{UsbConnector, UsbTransport};
