// Gateway trait for remote backend access
use crate::domain::dashboard::DashboardData;
use crate::domain::logs::LogEntry;
use crate::domain::settings::SettingEntry;
use async_trait::async_trait;

/// Fallback user message when nothing usable can be extracted from an error.
pub const FALLBACK_MESSAGE: &str = "Unexpected error.";

/// Outcome of one backend round trip. Two distinct failure channels: the call
/// itself failing (`Transport`), and a completed call whose envelope carried
/// `ok: false` (`Rejected`). A rejection carries no reason; the calling panel
/// supplies its own fixed user message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("{0}")]
    Transport(String),
    #[error("backend rejected the operation")]
    Rejected,
}

impl GatewayError {
    /// Build a transport error from whatever the failed call produced,
    /// applying the uniform extraction policy: a plain string is used
    /// verbatim; an object's `message` field is used with any literal
    /// "Exception: " prefix stripped; anything else is dumped structurally.
    pub fn transport(raw: &serde_json::Value) -> Self {
        let message = extract_message(raw).unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        GatewayError::Transport(message)
    }
}

fn extract_message(raw: &serde_json::Value) -> Option<String> {
    match raw {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) if text.is_empty() => None,
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Object(fields) => match fields.get("message") {
            Some(serde_json::Value::String(message)) => Some(
                message
                    .strip_prefix("Exception: ")
                    .unwrap_or(message)
                    .to_string(),
            ),
            _ => Some(raw.to_string()),
        },
        other => Some(other.to_string()),
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Asynchronous remote procedure surface consumed by the console. One method
/// per backend operation; implementations hold no per-call state and never
/// talk to the user themselves.
#[async_trait]
pub trait BackendGateway: Send + Sync {
    async fn fetch_dashboard(&self) -> GatewayResult<DashboardData>;

    /// Same wire shape as `fetch_dashboard`; a separate operation so the
    /// backend can distinguish an explicit operator refresh.
    async fn refresh_dashboard(&self) -> GatewayResult<DashboardData>;

    async fn fetch_settings(&self) -> GatewayResult<Vec<SettingEntry>>;

    async fn save_settings(&self, entries: Vec<SettingEntry>) -> GatewayResult<()>;

    async fn fetch_logs(&self) -> GatewayResult<Vec<LogEntry>>;

    /// Best-effort startup fetch; the payload is retained opaquely.
    async fn fetch_public_config(&self) -> GatewayResult<serde_json::Value>;
}
