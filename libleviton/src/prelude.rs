// libleviton/src/prelude.rs

pub use crate::catalog::LightCatalog;
#[cfg(feature = "config")]
pub use crate::config::ControllerConfig;
#[cfg(feature = "async")]
pub use crate::controller::AsyncController;
pub use crate::controller::{Controller, ControllerBuilder, PollReport};
pub use crate::entity::{EntityStateSink, MemorySink, entity_id, publish_states};
pub use crate::protocol::{LabelCounters, ParsedEvent};
pub use crate::reconcile::reconcile;
pub use crate::transport::{Connector, Transport};
#[cfg(feature = "usb")]
pub use crate::transport::{UsbConnector, UsbTransport};
pub use crate::{
    CommandKind, DeviceKind, Error, Header, LightDefinition, LightState, LightStateMap,
    RecordReject, Result, Signature,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_list, ms};
