use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub backend: BackendSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiSettings {
    /// Key-poll interval for the terminal loop, in milliseconds.
    pub tick_ms: u64,
    /// Optional initial-view hint; the CLI flag takes precedence.
    pub initial_view: Option<String>,
}

pub fn load_console_config() -> anyhow::Result<ConsoleConfig> {
    let settings = config::Config::builder()
        .set_default("backend.base_url", "http://localhost:8080")?
        .set_default("ui.tick_ms", 100_i64)?
        .add_source(config::File::with_name("config/console").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_resolves_with_defaults() {
        let config = load_console_config().unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8080");
        assert_eq!(config.ui.tick_ms, 100);
        assert!(config.ui.initial_view.is_none());
    }
}
