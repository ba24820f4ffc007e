// libleviton/src/protocol/label.rs

use crate::protocol::record::ParsedEvent;
use crate::types::DeviceKind;

/// Per-bucket counters for generated labels. Each counter holds the number
/// the next generated label of its bucket will carry, starting at 1.
///
/// One instance lives for as long as its controller, so numbering keeps
/// increasing across poll cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCounters {
    relay: u32,
    dimmer: u32,
    unknown: u32,
}

impl Default for LabelCounters {
    fn default() -> Self {
        Self {
            relay: 1,
            dimmer: 1,
            unknown: 1,
        }
    }
}

impl LabelCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `candidate` when non-empty, otherwise a generated
    /// `{Bucket}{n}` label for `kind`, advancing that bucket's counter.
    pub fn resolve(&mut self, kind: DeviceKind, candidate: &str) -> String {
        if !candidate.is_empty() {
            return candidate.to_string();
        }
        let counter = match kind {
            DeviceKind::Relay => &mut self.relay,
            DeviceKind::Dimmer => &mut self.dimmer,
            DeviceKind::Unknown => &mut self.unknown,
        };
        let label = format!("{}{}", kind, counter);
        *counter += 1;
        label
    }

    /// Resolve the event's label in place.
    pub fn resolve_event(&mut self, event: &mut ParsedEvent) {
        event.label = self.resolve(event.device_kind(), &event.label);
    }
}
