// Application controller - command dispatch and completion routing
use crate::application::dashboard_panel::DashboardPanel;
use crate::application::gateway::{BackendGateway, GatewayResult};
use crate::application::log_panel::LogPanel;
use crate::application::notifier::{Notice, Notifier, NOTICE_TTL};
use crate::application::settings_editor::{RowId, SettingField, SettingsEditor};
use crate::application::view_router::ViewRouter;
use crate::domain::dashboard::DashboardData;
use crate::domain::logs::LogEntry;
use crate::domain::settings::SettingEntry;
use crate::domain::view::ViewId;
use std::sync::Arc;
use tokio::sync::mpsc;

/// User-originated commands. The presentation layer translates gestures into
/// these; nothing in the core depends on how they were produced.
#[derive(Debug, Clone)]
pub enum Action {
    Activate(ViewId),
    LoadDashboard,
    RefreshDashboard,
    LoadSettings,
    AddSettingRow,
    RemoveSettingRow(RowId),
    EditSetting {
        row: RowId,
        field: SettingField,
        text: String,
    },
    SaveSettings,
    LoadLogs,
}

/// Completion of one scheduled task. Every spawned remote call sends exactly
/// one of these back to the single-threaded apply loop; panel state is only
/// ever mutated there, one message at a time.
#[derive(Debug)]
pub enum Msg {
    DashboardLoaded {
        outcome: GatewayResult<DashboardData>,
        announce: bool,
    },
    SettingsLoaded(GatewayResult<Vec<SettingEntry>>),
    SettingsSaved(GatewayResult<()>),
    LogsLoaded(GatewayResult<Vec<LogEntry>>),
    PublicConfigLoaded(GatewayResult<serde_json::Value>),
    NoticeExpired(u64),
}

/// Wires the router, notifier and panels together and owns the only gateway
/// handle. Remote calls are spawned; their results come back through `apply`.
pub struct AppController {
    gateway: Arc<dyn BackendGateway>,
    completions: mpsc::UnboundedSender<Msg>,
    pub router: ViewRouter,
    pub notifier: Notifier,
    pub dashboard: DashboardPanel,
    pub settings: SettingsEditor,
    pub logs: LogPanel,
    public_config: Option<serde_json::Value>,
}

impl AppController {
    pub fn new(gateway: Arc<dyn BackendGateway>, completions: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            gateway,
            completions,
            router: ViewRouter::new(ViewId::Dashboard),
            notifier: Notifier::new(),
            dashboard: DashboardPanel::new(),
            settings: SettingsEditor::new(),
            logs: LogPanel::new(),
            public_config: None,
        }
    }

    /// Startup sequence: best-effort public-config fetch, initial view from
    /// the hint, then the three independent panel loads. The loads may
    /// complete in any order; each panel's own flag guards its own region.
    pub fn startup(&mut self, view_hint: Option<&str>) {
        let gateway = self.gateway.clone();
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let outcome = gateway.fetch_public_config().await;
            let _ = completions.send(Msg::PublicConfigLoaded(outcome));
        });

        self.router.activate(ViewId::from_hint(view_hint));

        self.handle(Action::LoadDashboard);
        self.handle(Action::LoadSettings);
        self.handle(Action::LoadLogs);
    }

    /// Single command entry point. Pure state changes happen synchronously;
    /// remote operations spawn a task that reports back as one `Msg`.
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Activate(view) => self.router.activate(view),
            Action::LoadDashboard => {
                self.dashboard.begin_load();
                let gateway = self.gateway.clone();
                let completions = self.completions.clone();
                tokio::spawn(async move {
                    let outcome = gateway.fetch_dashboard().await;
                    let _ = completions.send(Msg::DashboardLoaded { outcome, announce: false });
                });
            }
            Action::RefreshDashboard => {
                self.dashboard.begin_load();
                let gateway = self.gateway.clone();
                let completions = self.completions.clone();
                tokio::spawn(async move {
                    let outcome = gateway.refresh_dashboard().await;
                    let _ = completions.send(Msg::DashboardLoaded { outcome, announce: true });
                });
            }
            Action::LoadSettings => {
                self.settings.begin_load();
                let gateway = self.gateway.clone();
                let completions = self.completions.clone();
                tokio::spawn(async move {
                    let outcome = gateway.fetch_settings().await;
                    let _ = completions.send(Msg::SettingsLoaded(outcome));
                });
            }
            Action::AddSettingRow => {
                self.settings.add_row();
            }
            Action::RemoveSettingRow(id) => self.settings.remove_row(id),
            Action::EditSetting { row, field, text } => self.settings.set_field(row, field, text),
            Action::SaveSettings => {
                let payload = self.settings.save_payload();
                tracing::debug!("Saving {} setting rows", payload.len());
                let gateway = self.gateway.clone();
                let completions = self.completions.clone();
                tokio::spawn(async move {
                    let outcome = gateway.save_settings(payload).await;
                    let _ = completions.send(Msg::SettingsSaved(outcome));
                });
            }
            Action::LoadLogs => {
                self.logs.begin_load();
                let gateway = self.gateway.clone();
                let completions = self.completions.clone();
                tokio::spawn(async move {
                    let outcome = gateway.fetch_logs().await;
                    let _ = completions.send(Msg::LogsLoaded(outcome));
                });
            }
        }
    }

    /// Apply one completion. Failures are recovered here, at the panel that
    /// issued the call; nothing propagates further.
    pub fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::DashboardLoaded { outcome, announce } => {
                let notice = self.dashboard.finish_load(outcome, announce);
                self.notify(notice);
            }
            Msg::SettingsLoaded(outcome) => {
                let notice = self.settings.finish_load(outcome);
                self.notify(notice);
            }
            Msg::SettingsSaved(outcome) => {
                let saved = outcome.is_ok();
                let notice = self.settings.finish_save(outcome);
                self.notify(notice);
                // Reload so the editor shows exactly what the backend kept.
                if saved {
                    self.handle(Action::LoadSettings);
                }
            }
            Msg::LogsLoaded(outcome) => {
                let notice = self.logs.finish_load(outcome);
                self.notify(notice);
            }
            Msg::PublicConfigLoaded(outcome) => match outcome {
                Ok(config) => self.public_config = Some(config),
                // Configuration is non-essential; failures stay silent.
                Err(err) => tracing::debug!("public config fetch failed: {}", err),
            },
            Msg::NoticeExpired(generation) => self.notifier.expire(generation),
        }
    }

    pub fn public_config(&self) -> Option<&serde_json::Value> {
        self.public_config.as_ref()
    }

    fn notify(&mut self, notice: Option<Notice>) {
        let Some(notice) = notice else { return };
        let generation = self.notifier.show(notice);
        let completions = self.completions.clone();
        tokio::spawn(async move {
            tokio::time::sleep(NOTICE_TTL).await;
            let _ = completions.send(Msg::NoticeExpired(generation));
        });
    }
}
