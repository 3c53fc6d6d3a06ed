// View identifiers for the console's top-level screens

/// The console's mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Dashboard,
    Settings,
    Logs,
}

impl ViewId {
    /// Tab order as presented to the operator.
    pub const ALL: [ViewId; 3] = [ViewId::Dashboard, ViewId::Settings, ViewId::Logs];

    /// Resolve the externally supplied initial-view hint. Recognized values
    /// are "settings" and "logs"; anything else (including no hint) falls
    /// back to the dashboard.
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint {
            Some("settings") => ViewId::Settings,
            Some("logs") => ViewId::Logs,
            _ => ViewId::Dashboard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Settings => "Settings",
            ViewId::Logs => "Logs",
        }
    }
}
