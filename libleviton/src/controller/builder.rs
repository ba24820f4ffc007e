// libleviton/src/controller/builder.rs

use crate::catalog::LightCatalog;
use crate::controller::Controller;
use crate::transport::Connector;
use crate::types::LightDefinition;
use crate::utils::DEFAULT_IO_TIMEOUT_MS;
use crate::{Error, Result};

/// Helper to construct a Controller with optional configuration.
pub struct ControllerBuilder {
    connector: Option<Box<dyn Connector>>,
    lights: Vec<LightDefinition>,
    poll_command: Vec<u8>,
    timeout_ms: u64,
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Self {
            connector: None,
            lights: Vec::new(),
            poll_command: Vec::new(),
            timeout_ms: DEFAULT_IO_TIMEOUT_MS,
        }
    }

    /// Provide the connector used to open the device for each operation
    /// (e.g. `UsbConnector` or `MockConnector`).
    pub fn with_connector(mut self, connector: Box<dyn Connector>) -> Self {
        self.connector = Some(connector);
        self
    }

    pub fn with_lights(mut self, lights: Vec<LightDefinition>) -> Self {
        self.lights = lights;
        self
    }

    pub fn with_light(mut self, light: LightDefinition) -> Self {
        self.lights.push(light);
        self
    }

    pub fn with_poll_command(mut self, poll_command: Vec<u8>) -> Self {
        self.poll_command = poll_command;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Copy the poll command, timeout and lights from a loaded config.
    #[cfg(feature = "config")]
    pub fn with_config(self, config: &crate::config::ControllerConfig) -> Self {
        self.with_poll_command(config.poll_command.clone())
            .with_timeout_ms(config.timeout_ms)
            .with_lights(config.lights.clone())
    }

    /// Consume the builder. A connector and a non-empty poll command are
    /// required.
    pub fn build(self) -> Result<Controller> {
        let connector = self
            .connector
            .ok_or_else(|| Error::Config("no connector provided".into()))?;
        if self.poll_command.is_empty() {
            return Err(Error::Config("poll command must not be empty".into()));
        }
        Ok(Controller::new(
            connector,
            LightCatalog::new(self.lights),
            self.poll_command,
            self.timeout_ms,
        ))
    }
}
