// libleviton/src/config.rs

//! Controller configuration loaded from TOML.
//!
//! ```toml
//! vendor_id = 0x20d8
//! product_id = 0x0004
//! poll_command = [0x00, 0x05, 0x7e, 0x01]
//!
//! [[lights]]
//! name = "Kitchen"
//! on  = [0x00, 0x0e, 0x7e, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x26, 0x01, 0x02, 0x03, 0x64]
//! off = [0x00, 0x0e, 0x7e, 0x0c, 0x00, 0x00, 0x00, 0x00, 0x26, 0x01, 0x02, 0x03, 0x00]
//! ```

#![cfg(feature = "config")]

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::LightDefinition;
use crate::utils::DEFAULT_IO_TIMEOUT_MS;
use crate::{Error, Result};

/// Device ids, poll settings and the light catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    pub vendor_id: u16,
    pub product_id: u16,
    /// Trigger written before every poll session
    pub poll_command: Vec<u8>,
    #[serde(default = "ControllerConfig::default_timeout_ms")]
    pub timeout_ms: u64,
    /// Seconds between polls of the async poll loop
    #[serde(default = "ControllerConfig::default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default)]
    pub lights: Vec<LightDefinition>,
}

impl ControllerConfig {
    fn default_timeout_ms() -> u64 {
        DEFAULT_IO_TIMEOUT_MS
    }

    fn default_poll_interval_secs() -> u64 {
        5
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| Error::Config(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_command.is_empty() {
            return Err(Error::Config("poll_command must not be empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(Error::Config("timeout_ms must be positive".into()));
        }
        if let Some(idx) = self.lights.iter().position(|l| l.name.trim().is_empty()) {
            return Err(Error::Config(format!("light #{} has an empty name", idx + 1)));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs)
    }
}
