use std::collections::VecDeque;
use std::sync::Mutex;

use color_eyre::eyre::Report;

use crate::app::ports::NotificationSink;

const DEFAULT_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedFailure {
    pub label: String,
    pub detail: String,
}

/// Bounded in-memory log of reported failures.
///
/// The host status bar reads the newest entry; older entries fall off the
/// front once the capacity is reached.
pub struct MessageLog {
    entries: Mutex<VecDeque<LoggedFailure>>,
    capacity: usize,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    pub fn entries(&self) -> Vec<LoggedFailure> {
        self.entries
            .lock()
            .expect("message log mutex poisoned")
            .iter()
            .cloned()
            .collect()
    }

    pub fn last(&self) -> Option<LoggedFailure> {
        self.entries
            .lock()
            .expect("message log mutex poisoned")
            .back()
            .cloned()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for MessageLog {
    fn log_exception(&self, error: &Report, label: &str) {
        let mut entries = self.entries.lock().expect("message log mutex poisoned");
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(LoggedFailure {
            label: label.to_string(),
            detail: format!("{:#}", error),
        });
    }
}
