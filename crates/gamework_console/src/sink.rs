//! Captures `log` records for display in the console.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared buffer fed by a fern output.
///
/// Records can arrive from any thread; the console drains them once per
/// frame. When nobody drains, the oldest lines are dropped past `capacity`.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl ConsoleSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        // a panic while holding the lock leaves plain strings behind; keep going
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, line: String) {
        let mut lines = self.lock();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Take every buffered line, oldest first.
    pub fn drain(&self) -> Vec<String> {
        self.lock().drain(..).collect()
    }

    /// Output to chain into the logger dispatch (see
    /// `gamework_core::logging::init`). Records arrive already formatted.
    pub fn output(&self) -> fern::Output {
        let sink = self.clone();
        fern::Output::call(move |record| sink.push(record.args().to_string()))
    }
}
