// libleviton/src/controller/session.rs

use log::{debug, error, warn};

use crate::Result;
use crate::constants::{DUPLICATE_LIMIT, IN_ENDPOINT, OUT_ENDPOINT, REPORT_SIZE};
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;

/// Tracks how many consecutive reads returned the same report.
///
/// The streak counts the current read, so it is 1 after any report that
/// differs from its predecessor and reaches `limit` on the `limit`-th
/// identical read in a row.
#[derive(Debug, Clone)]
pub struct DuplicateTracker {
    last: Option<Vec<u8>>,
    streak: usize,
    limit: usize,
}

impl Default for DuplicateTracker {
    fn default() -> Self {
        Self::new(DUPLICATE_LIMIT)
    }
}

impl DuplicateTracker {
    pub fn new(limit: usize) -> Self {
        Self {
            last: None,
            streak: 0,
            limit,
        }
    }

    /// Record a report; returns true once the session is complete.
    pub fn observe(&mut self, report: &[u8]) -> bool {
        if self.last.as_deref() == Some(report) {
            self.streak += 1;
        } else {
            self.streak = 1;
            self.last = Some(report.to_vec());
        }
        self.streak >= self.limit
    }

    pub fn streak(&self) -> usize {
        self.streak
    }
}

/// Drain one poll session: write the trigger, then read reports until the
/// duplicate limit is reached. Overflow reads are skipped without touching
/// the streak; any other transport error aborts the session.
///
/// Returns every report read, terminating duplicates included.
pub fn read_session(
    transport: &mut dyn Transport,
    poll_command: &[u8],
    timeout_ms: u64,
) -> Result<Vec<Vec<u8>>> {
    debug!("starting poll session");
    transport.write(OUT_ENDPOINT, poll_command, timeout_ms)?;

    let mut tracker = DuplicateTracker::default();
    let mut reports = Vec::new();

    loop {
        let report = match transport.read(IN_ENDPOINT, REPORT_SIZE, timeout_ms) {
            Ok(r) => r,
            Err(e) if e.is_transient() => {
                warn!("usb overflow during poll, skipping this read");
                continue;
            }
            Err(e) => {
                error!("usb error during polling after {} reports: {}", reports.len(), e);
                return Err(e);
            }
        };
        debug!("raw usb report: {}", bytes_to_hex_spaced(&report));

        let done = tracker.observe(&report);
        reports.push(report);
        if done {
            debug!(
                "{} identical reports in a row, ending poll session",
                tracker.streak()
            );
            break;
        }
        if tracker.streak() > 1 {
            debug!("repeated report count: {}", tracker.streak());
        }
    }

    Ok(reports)
}
