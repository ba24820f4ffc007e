use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crate::common::fixtures;

use libleviton::controller::Controller;
use libleviton::transport::{Connector, Transport};
use libleviton::Result;

#[derive(Default)]
struct Counters {
    active: AtomicUsize,
    max_active: AtomicUsize,
    operations: AtomicUsize,
}

/// Transport that records how many handles are open at once.
struct TrackingTransport {
    counters: Arc<Counters>,
}

impl Transport for TrackingTransport {
    fn write(&mut self, _endpoint: u8, data: &[u8], _timeout_ms: u64) -> Result<usize> {
        thread::sleep(Duration::from_millis(2));
        Ok(data.len())
    }

    fn read(&mut self, _endpoint: u8, _length: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        thread::sleep(Duration::from_millis(1));
        Ok(fixtures::idle_report())
    }

    fn reset(&mut self) -> Result<()> {
        self.counters.active.fetch_sub(1, Ordering::SeqCst);
        self.counters.operations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct TrackingConnector {
    counters: Arc<Counters>,
}

impl Connector for TrackingConnector {
    fn open(&self) -> Result<Box<dyn Transport>> {
        let now = self.counters.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.counters.max_active.fetch_max(now, Ordering::SeqCst);
        Ok(Box::new(TrackingTransport {
            counters: Arc::clone(&self.counters),
        }))
    }
}

#[test]
fn polls_and_commands_never_overlap() {
    let counters = Arc::new(Counters::default());
    let controller = Controller::new(
        Box::new(TrackingConnector {
            counters: Arc::clone(&counters),
        }),
        fixtures::lights().into(),
        vec![0x01],
        1000,
    );

    thread::scope(|s| {
        for i in 0..4 {
            let controller = &controller;
            s.spawn(move || {
                for _ in 0..3 {
                    if i % 2 == 0 {
                        assert!(controller.poll_states().is_some());
                    } else {
                        assert!(controller.turn_on("Kitchen"));
                    }
                }
            });
        }
    });

    assert_eq!(counters.max_active.load(Ordering::SeqCst), 1);
    assert_eq!(counters.active.load(Ordering::SeqCst), 0);
    assert_eq!(counters.operations.load(Ordering::SeqCst), 12);
}
