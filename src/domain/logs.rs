// Log entry domain model
use serde::Deserialize;

/// One backend log line. Read-only on this side; displayed in server order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl LogEntry {
    /// Meta line shown above the message: `[LEVEL] timestamp — source`.
    /// Level falls back to INFO and timestamp to an em-dash when absent.
    pub fn meta_line(&self) -> String {
        let level = if self.level.is_empty() { "INFO" } else { &self.level };
        let timestamp = if self.timestamp.is_empty() { "—" } else { &self.timestamp };
        format!("[{}] {} — {}", level, timestamp, self.source)
    }

    /// Details are shown only when present and non-empty.
    pub fn details_line(&self) -> Option<&str> {
        self.details.as_deref().filter(|details| !details.is_empty())
    }
}
