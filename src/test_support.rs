//! Shared test support utilities
//!
//! In-memory sinks for unit tests, integration tests and downstream crates
//! that want to assert on exactly what a logger wrote.

use crate::sink::Sink;
use parking_lot::Mutex;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Records every write as a separate buffer.
#[derive(Debug, Default)]
pub struct MemorySink {
    writes: Mutex<Vec<Vec<u8>>>,
    report_limit: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the full buffer but reports at most `limit` bytes written.
    pub fn truncating(limit: usize) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            report_limit: Some(limit),
        }
    }

    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.writes.lock().clone()
    }

    pub fn last_string(&self) -> Option<String> {
        self.writes
            .lock()
            .last()
            .map(|w| String::from_utf8_lossy(w).into_owned())
    }

    pub fn clear(&self) {
        self.writes.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.writes.lock().push(buf.to_vec());
        Ok(self.report_limit.map_or(buf.len(), |limit| limit.min(buf.len())))
    }
}

/// Fails every write and counts the attempts.
#[derive(Debug, Default)]
pub struct FailingSink {
    attempts: AtomicUsize,
}

impl FailingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Sink for FailingSink {
    fn write(&self, _buf: &[u8]) -> io::Result<usize> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::other("writer configured to fail"))
    }
}
