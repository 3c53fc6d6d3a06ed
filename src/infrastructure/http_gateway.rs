// HTTP gateway implementation
use crate::application::gateway::{BackendGateway, GatewayError, GatewayResult};
use crate::domain::dashboard::DashboardData;
use crate::domain::logs::LogEntry;
use crate::domain::settings::SettingEntry;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// `BackendGateway` over the backend's HTTP RPC surface: every operation is a
/// POST to `{base_url}/api/{operation}` answered by a `{ "ok": bool, ... }`
/// envelope. `ok: false` is a valid outcome, reported as `Rejected`; anything
/// that keeps the envelope from arriving is a transport failure.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn invoke(&self, operation: &str, args: Value) -> GatewayResult<Value> {
        let url = format!("{}/api/{}", self.base_url, operation);
        tracing::debug!("invoking {}", operation);

        let response = self
            .client
            .post(&url)
            .json(&args)
            .send()
            .await
            .map_err(|err| GatewayError::transport(&Value::String(err.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let raw = serde_json::from_str(&body).unwrap_or_else(|_| {
                Value::String(format!("backend returned status {}", status))
            });
            tracing::warn!("{} failed with status {}", operation, status);
            return Err(GatewayError::transport(&raw));
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|err| GatewayError::transport(&Value::String(err.to_string())))?;

        if envelope.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            Ok(envelope)
        } else {
            Err(GatewayError::Rejected)
        }
    }

    /// Pull one named field out of an ok envelope. A missing field
    /// deserializes from its empty default rather than failing, mirroring
    /// the contract's optional payload members.
    fn payload<T: DeserializeOwned>(envelope: Value, field: &str, empty: Value) -> GatewayResult<T> {
        let raw = envelope.get(field).cloned().unwrap_or(empty);
        serde_json::from_value(raw)
            .map_err(|err| GatewayError::transport(&Value::String(err.to_string())))
    }
}

#[async_trait]
impl BackendGateway for HttpGateway {
    async fn fetch_dashboard(&self) -> GatewayResult<DashboardData> {
        let envelope = self.invoke("fetchDashboard", json!({})).await?;
        Self::payload(envelope, "data", json!({}))
    }

    async fn refresh_dashboard(&self) -> GatewayResult<DashboardData> {
        let envelope = self.invoke("refreshDashboard", json!({})).await?;
        Self::payload(envelope, "data", json!({}))
    }

    async fn fetch_settings(&self) -> GatewayResult<Vec<SettingEntry>> {
        let envelope = self.invoke("fetchSettings", json!({})).await?;
        Self::payload(envelope, "settings", json!([]))
    }

    async fn save_settings(&self, entries: Vec<SettingEntry>) -> GatewayResult<()> {
        let args = serde_json::to_value(entries)
            .map_err(|err| GatewayError::transport(&Value::String(err.to_string())))?;
        self.invoke("saveSettings", args).await?;
        Ok(())
    }

    async fn fetch_logs(&self) -> GatewayResult<Vec<LogEntry>> {
        let envelope = self.invoke("fetchLogs", json!({})).await?;
        Self::payload(envelope, "logs", json!([]))
    }

    async fn fetch_public_config(&self) -> GatewayResult<Value> {
        let envelope = self.invoke("fetchPublicConfig", json!({})).await?;
        Ok(envelope.get("config").cloned().unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let gateway = HttpGateway::new("http://localhost:8080/".to_string());
        assert_eq!(gateway.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_payload_defaults_missing_fields() {
        let envelope = json!({ "ok": true });
        let settings: Vec<SettingEntry> =
            HttpGateway::payload(envelope, "settings", json!([])).unwrap();
        assert!(settings.is_empty());
    }

    #[test]
    fn test_payload_extracts_named_field() {
        let envelope = json!({ "ok": true, "data": { "generatedAt": "now" } });
        let data: DashboardData = HttpGateway::payload(envelope, "data", json!({})).unwrap();
        assert_eq!(data.generated_at, "now");
    }
}
