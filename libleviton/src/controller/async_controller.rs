// libleviton/src/controller/async_controller.rs

#![cfg(feature = "async")]

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error};

use crate::controller::Controller;
use crate::entity::{EntityStateSink, publish_states};
use crate::types::{CommandKind, LightStateMap};

/// Runs the blocking controller on tokio's blocking pool so USB I/O never
/// stalls the async executor.
#[derive(Clone)]
pub struct AsyncController {
    inner: Arc<Controller>,
}

impl AsyncController {
    pub fn new(controller: Controller) -> Self {
        Self {
            inner: Arc::new(controller),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.inner
    }

    pub async fn poll_states(&self) -> Option<LightStateMap> {
        let inner = Arc::clone(&self.inner);
        match tokio::task::spawn_blocking(move || inner.poll_states()).await {
            Ok(states) => states,
            Err(e) => {
                error!("poll task failed: {}", e);
                None
            }
        }
    }

    pub async fn send_command(&self, light: &str, kind: CommandKind) -> bool {
        let inner = Arc::clone(&self.inner);
        let light = light.to_string();
        match tokio::task::spawn_blocking(move || inner.send_command(&light, kind)).await {
            Ok(ok) => ok,
            Err(e) => {
                error!("command task failed: {}", e);
                false
            }
        }
    }

    /// Poll once and publish the result. Returns false when the poll failed
    /// and nothing was published.
    pub async fn poll_and_publish<S: EntityStateSink + ?Sized>(&self, sink: &mut S) -> bool {
        match self.poll_states().await {
            Some(states) => {
                let applied = publish_states(sink, &states);
                debug!("published {} of {} light states", applied, states.len());
                true
            }
            None => false,
        }
    }

    /// Poll on a fixed interval forever. A failed cycle is skipped; the next
    /// tick retries.
    pub async fn run_poll_loop<S: EntityStateSink + ?Sized>(
        &self,
        interval: Duration,
        sink: &mut S,
    ) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.poll_and_publish(sink).await;
        }
    }
}
