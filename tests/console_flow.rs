// Controller flows driven end-to-end over an in-memory gateway
use async_trait::async_trait;
use opsdeck::application::controller::{Action, AppController, Msg};
use opsdeck::application::gateway::{BackendGateway, GatewayError, GatewayResult};
use opsdeck::application::notifier::NoticeKind;
use opsdeck::application::settings_editor::SettingField;
use opsdeck::domain::dashboard::DashboardData;
use opsdeck::domain::logs::LogEntry;
use opsdeck::domain::settings::SettingEntry;
use opsdeck::domain::view::ViewId;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

#[derive(Default)]
struct CallLog {
    fetch_dashboard: usize,
    refresh_dashboard: usize,
    fetch_settings: usize,
    save_settings: usize,
    fetch_logs: usize,
    fetch_public_config: usize,
    saved_payloads: Vec<Vec<SettingEntry>>,
}

/// Scriptable in-memory backend. Each operation's next outcome can be
/// swapped between actions; every call is recorded.
struct FakeGateway {
    calls: Mutex<CallLog>,
    dashboard: Mutex<GatewayResult<DashboardData>>,
    settings: Mutex<GatewayResult<Vec<SettingEntry>>>,
    save: Mutex<GatewayResult<()>>,
    logs: Mutex<GatewayResult<Vec<LogEntry>>>,
    public_config: Mutex<GatewayResult<serde_json::Value>>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self {
            calls: Mutex::new(CallLog::default()),
            dashboard: Mutex::new(Ok(DashboardData::default())),
            settings: Mutex::new(Ok(vec![])),
            save: Mutex::new(Ok(())),
            logs: Mutex::new(Ok(vec![])),
            public_config: Mutex::new(Ok(serde_json::Value::Null)),
        }
    }
}

#[async_trait]
impl BackendGateway for FakeGateway {
    async fn fetch_dashboard(&self) -> GatewayResult<DashboardData> {
        self.calls.lock().unwrap().fetch_dashboard += 1;
        self.dashboard.lock().unwrap().clone()
    }

    async fn refresh_dashboard(&self) -> GatewayResult<DashboardData> {
        self.calls.lock().unwrap().refresh_dashboard += 1;
        self.dashboard.lock().unwrap().clone()
    }

    async fn fetch_settings(&self) -> GatewayResult<Vec<SettingEntry>> {
        self.calls.lock().unwrap().fetch_settings += 1;
        self.settings.lock().unwrap().clone()
    }

    async fn save_settings(&self, entries: Vec<SettingEntry>) -> GatewayResult<()> {
        let mut calls = self.calls.lock().unwrap();
        calls.save_settings += 1;
        calls.saved_payloads.push(entries);
        self.save.lock().unwrap().clone()
    }

    async fn fetch_logs(&self) -> GatewayResult<Vec<LogEntry>> {
        self.calls.lock().unwrap().fetch_logs += 1;
        self.logs.lock().unwrap().clone()
    }

    async fn fetch_public_config(&self) -> GatewayResult<serde_json::Value> {
        self.calls.lock().unwrap().fetch_public_config += 1;
        self.public_config.lock().unwrap().clone()
    }
}

fn console(gateway: Arc<FakeGateway>) -> (AppController, mpsc::UnboundedReceiver<Msg>) {
    let (completions_tx, completions_rx) = mpsc::unbounded_channel();
    (AppController::new(gateway, completions_tx), completions_rx)
}

async fn apply_next(
    controller: &mut AppController,
    completions: &mut mpsc::UnboundedReceiver<Msg>,
    count: usize,
) {
    for _ in 0..count {
        let msg = completions.recv().await.expect("completion expected");
        controller.apply(msg);
    }
}

#[tokio::test]
async fn startup_issues_config_fetch_and_all_three_loads() {
    let gateway = Arc::new(FakeGateway::default());
    let (mut controller, mut completions) = console(gateway.clone());

    controller.startup(None);
    apply_next(&mut controller, &mut completions, 4).await;

    let calls = gateway.calls.lock().unwrap();
    assert_eq!(calls.fetch_public_config, 1);
    assert_eq!(calls.fetch_dashboard, 1);
    assert_eq!(calls.fetch_settings, 1);
    assert_eq!(calls.fetch_logs, 1);
    drop(calls);

    assert_eq!(controller.router.active(), ViewId::Dashboard);
    assert!(!controller.dashboard.is_loading());
    // Empty settings fetch seeds a single blank editable row.
    assert_eq!(controller.settings.rows().len(), 1);
    assert!(controller.notifier.current().is_none());
}

#[tokio::test]
async fn startup_honors_recognized_view_hint() {
    let gateway = Arc::new(FakeGateway::default());
    let (mut controller, mut completions) = console(gateway);

    controller.startup(Some("logs"));
    apply_next(&mut controller, &mut completions, 4).await;

    assert_eq!(controller.router.active(), ViewId::Logs);
}

#[tokio::test]
async fn successful_save_reloads_settings_exactly_once() {
    let gateway = Arc::new(FakeGateway::default());
    let (mut controller, mut completions) = console(gateway.clone());

    controller.handle(Action::LoadSettings);
    apply_next(&mut controller, &mut completions, 1).await;

    // Operator fills the seeded blank row and adds a second, key-less one.
    let first = controller.settings.rows()[0].id;
    controller.handle(Action::EditSetting {
        row: first,
        field: SettingField::Key,
        text: " a ".to_string(),
    });
    controller.handle(Action::EditSetting {
        row: first,
        field: SettingField::Value,
        text: "1".to_string(),
    });
    controller.handle(Action::AddSettingRow);
    let second = controller.settings.rows()[1].id;
    controller.handle(Action::EditSetting {
        row: second,
        field: SettingField::Value,
        text: "x".to_string(),
    });

    controller.handle(Action::SaveSettings);
    // SettingsSaved, then the follow-up SettingsLoaded.
    apply_next(&mut controller, &mut completions, 2).await;

    let calls = gateway.calls.lock().unwrap();
    assert_eq!(calls.save_settings, 1);
    assert_eq!(calls.fetch_settings, 2);
    // Blank-key row dropped, key trimmed, value untrimmed.
    assert_eq!(calls.saved_payloads[0], vec![SettingEntry::new("a", "1", "")]);
    drop(calls);

    let notice = controller.notifier.current().expect("save notice");
    assert_eq!(notice.message, "Settings saved.");
    assert_eq!(notice.kind, NoticeKind::Success);
}

#[tokio::test]
async fn rejected_save_keeps_rows_and_skips_reload() {
    let gateway = Arc::new(FakeGateway::default());
    *gateway.save.lock().unwrap() = Err(GatewayError::Rejected);
    let (mut controller, mut completions) = console(gateway.clone());

    controller.handle(Action::LoadSettings);
    apply_next(&mut controller, &mut completions, 1).await;
    let row = controller.settings.rows()[0].id;
    controller.handle(Action::EditSetting {
        row,
        field: SettingField::Key,
        text: "retries".to_string(),
    });

    controller.handle(Action::SaveSettings);
    apply_next(&mut controller, &mut completions, 1).await;

    let calls = gateway.calls.lock().unwrap();
    assert_eq!(calls.save_settings, 1);
    assert_eq!(calls.fetch_settings, 1);
    drop(calls);

    // The operator's rows are left exactly as they were.
    assert_eq!(controller.settings.rows()[0].entry.key, "retries");
    let notice = controller.notifier.current().expect("error notice");
    assert_eq!(notice.message, "Unable to save settings.");
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[tokio::test]
async fn transport_error_on_logs_keeps_previous_feed() {
    let gateway = Arc::new(FakeGateway::default());
    *gateway.logs.lock().unwrap() = Ok(vec![LogEntry {
        message: "kept".to_string(),
        ..LogEntry::default()
    }]);
    let (mut controller, mut completions) = console(gateway.clone());

    controller.handle(Action::LoadLogs);
    apply_next(&mut controller, &mut completions, 1).await;
    assert_eq!(controller.logs.entries().len(), 1);

    *gateway.logs.lock().unwrap() =
        Err(GatewayError::Transport("backend unreachable".to_string()));
    controller.handle(Action::LoadLogs);
    apply_next(&mut controller, &mut completions, 1).await;

    assert_eq!(controller.logs.entries().len(), 1);
    assert_eq!(controller.logs.entries()[0].message, "kept");
    let notice = controller.notifier.current().expect("error notice");
    assert_eq!(notice.message, "backend unreachable");
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[tokio::test]
async fn overlapping_dashboard_completions_apply_in_completion_order() {
    let gateway = Arc::new(FakeGateway::default());
    let (mut controller, mut completions) = console(gateway.clone());

    // Two calls in flight at once; drain the fake's own completions so this
    // test can stage an out-of-issue-order arrival by hand.
    controller.handle(Action::RefreshDashboard);
    controller.handle(Action::LoadDashboard);
    let _ = completions.recv().await.expect("first completion");
    let _ = completions.recv().await.expect("second completion");

    let calls = gateway.calls.lock().unwrap();
    assert_eq!(calls.refresh_dashboard, 1);
    assert_eq!(calls.fetch_dashboard, 1);
    drop(calls);

    // The refresh that was issued first completes last.
    let mut stale = DashboardData::default();
    stale.generated_at = "09:00".to_string();
    let mut fresh = DashboardData::default();
    fresh.generated_at = "10:00".to_string();

    controller.apply(Msg::DashboardLoaded { outcome: Ok(stale), announce: false });
    controller.apply(Msg::DashboardLoaded { outcome: Ok(fresh), announce: true });

    assert_eq!(controller.dashboard.generated_at(), "10:00");
    assert!(!controller.dashboard.is_loading());
    let notice = controller.notifier.current().expect("refresh notice");
    assert_eq!(notice.message, "Dashboard updated.");
}

#[tokio::test]
async fn public_config_failure_stays_silent() {
    let gateway = Arc::new(FakeGateway::default());
    *gateway.public_config.lock().unwrap() =
        Err(GatewayError::Transport("config store down".to_string()));
    let (mut controller, mut completions) = console(gateway);

    controller.startup(None);
    apply_next(&mut controller, &mut completions, 4).await;

    assert!(controller.public_config().is_none());
    assert!(controller.notifier.current().is_none());
}

#[tokio::test]
async fn public_config_is_retained_but_opaque() {
    let gateway = Arc::new(FakeGateway::default());
    *gateway.public_config.lock().unwrap() = Ok(serde_json::json!({"env": "staging"}));
    let (mut controller, mut completions) = console(gateway);

    controller.startup(None);
    apply_next(&mut controller, &mut completions, 4).await;

    assert_eq!(
        controller.public_config(),
        Some(&serde_json::json!({"env": "staging"}))
    );
}

#[tokio::test]
async fn activate_is_idempotent_across_actions() {
    let gateway = Arc::new(FakeGateway::default());
    let (mut controller, _completions) = console(gateway);

    controller.handle(Action::Activate(ViewId::Settings));
    controller.handle(Action::Activate(ViewId::Settings));
    assert_eq!(controller.router.active(), ViewId::Settings);

    controller.handle(Action::Activate(ViewId::Dashboard));
    assert_eq!(controller.router.active(), ViewId::Dashboard);
}
