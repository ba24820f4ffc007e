// libleviton/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::traits::{Connector, Transport};
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    reads: VecDeque<Result<Vec<u8>>>,
    writes: Vec<(u8, Vec<u8>)>,
    read_calls: usize,
    resets: usize,
    opens: usize,
    /// Testing hook: accept only this many bytes per write
    write_limit: Option<usize>,
    fail_writes: bool,
}

/// Mock transport for unit tests. It records writes and returns queued
/// reads. Clones share the same state so a test can keep a handle while a
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // a panicking test thread must not hide the recorded calls
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Queue a report returned by the next read.
    pub fn push_report(&self, report: Vec<u8>) {
        self.state().reads.push_back(Ok(report));
    }

    /// Queue the same report `count` times.
    pub fn push_repeated(&self, report: Vec<u8>, count: usize) {
        for _ in 0..count {
            self.push_report(report.clone());
        }
    }

    /// Queue an error returned by the next read.
    pub fn push_error(&self, err: Error) {
        self.state().reads.push_back(Err(err));
    }

    pub fn set_write_limit(&self, limit: usize) {
        self.state().write_limit = Some(limit);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.state().fail_writes = fail;
    }

    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.state().writes.clone()
    }

    pub fn read_calls(&self) -> usize {
        self.state().read_calls
    }

    pub fn resets(&self) -> usize {
        self.state().resets
    }

    pub fn opens(&self) -> usize {
        self.state().opens
    }

    pub fn pending_reads(&self) -> usize {
        self.state().reads.len()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, endpoint: u8, data: &[u8], _timeout_ms: u64) -> Result<usize> {
        let mut state = self.state();
        if state.fail_writes {
            return Err(Error::TransportFault("mock write failure".into()));
        }
        state.writes.push((endpoint, data.to_vec()));
        Ok(state.write_limit.map_or(data.len(), |l| l.min(data.len())))
    }

    fn read(&mut self, _endpoint: u8, length: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        let mut state = self.state();
        state.read_calls += 1;
        match state.reads.pop_front() {
            Some(Ok(mut report)) => {
                report.truncate(length);
                Ok(report)
            }
            Some(Err(e)) => Err(e),
            // Nothing queued: behave like a device that stopped answering
            None => Err(Error::Timeout),
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.state().resets += 1;
        Ok(())
    }
}

/// Connector handing out clones of one shared [`MockTransport`].
#[derive(Debug, Clone)]
pub struct MockConnector {
    transport: MockTransport,
    device_present: bool,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new(MockTransport::new())
    }
}

impl MockConnector {
    pub fn new(transport: MockTransport) -> Self {
        Self {
            transport,
            device_present: true,
        }
    }

    /// Connector whose device is never found.
    pub fn absent() -> Self {
        Self {
            transport: MockTransport::new(),
            device_present: false,
        }
    }

    pub fn transport(&self) -> &MockTransport {
        &self.transport
    }
}

impl Connector for MockConnector {
    fn open(&self) -> Result<Box<dyn Transport>> {
        if !self.device_present {
            return Err(Error::DeviceNotFound {
                vendor_id: 0,
                product_id: 0,
            });
        }
        self.transport.state().opens += 1;
        Ok(Box::new(self.transport.clone()))
    }
}
