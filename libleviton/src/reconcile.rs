// libleviton/src/reconcile.rs

//! Matching decoded events against the light catalog.

use log::{debug, warn};

use crate::catalog::LightCatalog;
use crate::protocol::ParsedEvent;
use crate::types::{CommandKind, LightState, LightStateMap};

/// Match decoded events against the catalog and build the state map.
///
/// A header signature equal to a light's `on` signature sets the light to
/// `state == ON`; equal to its `off` signature, to `state == OFF`. The `on`
/// signature is checked first. Events apply in order, so a later match
/// overwrites an earlier one for the same light. Header-only events carry
/// no state and are skipped.
pub fn reconcile(events: &[ParsedEvent], catalog: &LightCatalog) -> LightStateMap {
    let mut states = LightStateMap::new();

    for event in events {
        if event.is_header_only() {
            debug!("skipping header-only record {}", event.header);
            continue;
        }

        let middle = event.header.signature();
        for light in catalog {
            let on_sig = light.signature(CommandKind::On);
            let off_sig = light.signature(CommandKind::Off);

            if on_sig == Some(middle) {
                states.insert(light.name.clone(), event.state == LightState::On);
            } else if off_sig == Some(middle) {
                states.insert(light.name.clone(), event.state == LightState::Off);
            }
        }
        debug!("processed record {} ({}), states: {:?}", event.header, event.label, states);
    }

    if states.is_empty() && !events.is_empty() {
        warn!("no configured light matched {} decoded records", events.len());
    }
    states
}
