// libleviton/src/controller/mod.rs

//! Controller handle: serializes every USB operation behind one lock and
//! exposes polling and command dispatch.

use std::sync::{Mutex, MutexGuard};

use log::{error, info};

use crate::catalog::LightCatalog;
use crate::protocol::{self, LabelCounters, ParsedEvent};
use crate::reconcile::reconcile;
use crate::transport::{Connector, ResetOnDrop};
use crate::types::{CommandKind, LightStateMap};
use crate::Result;

#[cfg(feature = "async")]
pub mod async_controller;
pub mod builder;
pub mod dispatch;
pub mod session;

#[cfg(feature = "async")]
pub use async_controller::AsyncController;
pub use builder::ControllerBuilder;

/// State only touched while holding the serialization lock.
#[derive(Debug, Default)]
struct SessionState {
    labels: LabelCounters,
}

/// Everything a poll session produced, stage by stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Raw reports in read order, terminating duplicates included.
    pub reports: Vec<Vec<u8>>,
    /// Combined records in discovery order.
    pub records: Vec<Vec<u8>>,
    pub events: Vec<ParsedEvent>,
    /// Records dropped by validation.
    pub rejected: usize,
    pub states: LightStateMap,
}

/// Handle to one lighting controller.
pub struct Controller {
    connector: Box<dyn Connector>,
    catalog: LightCatalog,
    poll_command: Vec<u8>,
    timeout_ms: u64,
    lock: Mutex<SessionState>,
}

impl Controller {
    /// Create a controller. Prefer [`ControllerBuilder`] when loading from
    /// configuration.
    pub fn new(
        connector: Box<dyn Connector>,
        catalog: LightCatalog,
        poll_command: Vec<u8>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            connector,
            catalog,
            poll_command,
            timeout_ms,
            lock: Mutex::new(SessionState::default()),
        }
    }

    fn acquire(&self) -> MutexGuard<'_, SessionState> {
        // A panic mid-operation leaves nothing half-written that matters
        // here; the transport was reset by its guard.
        self.lock.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn catalog(&self) -> &LightCatalog {
        &self.catalog
    }

    /// Run one poll session and decode it.
    pub fn poll(&self) -> Result<PollReport> {
        let mut session = self.acquire();

        let reports = {
            let mut transport = ResetOnDrop::new(self.connector.open()?);
            session::read_session(&mut *transport, &self.poll_command, self.timeout_ms)?
        };

        let decoded = protocol::decode_reports(&reports, &mut session.labels);
        let states = reconcile(&decoded.events, &self.catalog);

        Ok(PollReport {
            reports,
            records: decoded.records,
            events: decoded.events,
            rejected: decoded.rejected,
            states,
        })
    }

    /// Poll and return the light states, or `None` when the session failed.
    pub fn poll_states(&self) -> Option<LightStateMap> {
        match self.poll() {
            Ok(report) => Some(report.states),
            Err(e) => {
                error!("failed to poll light state: {}", e);
                None
            }
        }
    }

    /// Send the `kind` command for `light`.
    ///
    /// Configuration errors are reported before the lock is taken or the
    /// device is opened.
    pub fn try_send_command(&self, light: &str, kind: CommandKind) -> Result<()> {
        let command = self.catalog.command_for(light, kind)?;

        let _session = self.acquire();
        let mut transport = ResetOnDrop::new(self.connector.open()?);
        dispatch::write_command(&mut *transport, command, self.timeout_ms)?;
        info!("executed '{}' command for '{}'", kind, light);
        Ok(())
    }

    /// Send a command and report success as a boolean; failures are logged.
    pub fn send_command(&self, light: &str, kind: CommandKind) -> bool {
        match self.try_send_command(light, kind) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to send command '{}' to light '{}': {}", kind, light, e);
                false
            }
        }
    }

    pub fn turn_on(&self, light: &str) -> bool {
        self.send_command(light, CommandKind::On)
    }

    pub fn turn_off(&self, light: &str) -> bool {
        self.send_command(light, CommandKind::Off)
    }
}
