// Log feed panel - read-only backend log display
use crate::application::gateway::{GatewayError, GatewayResult};
use crate::application::notifier::Notice;
use crate::domain::logs::LogEntry;

pub const NO_LOGS: &str = "No logs available.";

/// One renderable feed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogItem {
    Placeholder(&'static str),
    Entry {
        meta: String,
        message: String,
        details: Option<String>,
    },
}

/// Owns the most recently fetched log sequence, in server order. Refresh is
/// manual only; there is no pagination or filtering.
#[derive(Debug, Default)]
pub struct LogPanel {
    loading: bool,
    entries: Vec<LogEntry>,
}

impl LogPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, outcome: GatewayResult<Vec<LogEntry>>) -> Option<Notice> {
        self.loading = false;
        match outcome {
            Ok(entries) => {
                self.entries = entries;
                None
            }
            Err(GatewayError::Rejected) => Some(Notice::error("Unable to load logs.")),
            Err(GatewayError::Transport(message)) => Some(Notice::error(message)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn items(&self) -> Vec<LogItem> {
        if self.entries.is_empty() {
            return vec![LogItem::Placeholder(NO_LOGS)];
        }
        self.entries
            .iter()
            .map(|entry| LogItem::Entry {
                meta: entry.meta_line(),
                message: entry.message.clone(),
                details: entry.details_line().map(str::to_string),
            })
            .collect()
    }
}
