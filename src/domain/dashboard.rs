// Dashboard domain model
use serde::Deserialize;

/// One dashboard snapshot as delivered by the backend. Replaced wholesale on
/// every successful fetch; never merged incrementally.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub tables: Vec<ReportTable>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Kpi {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub display: Option<String>,
}

impl Kpi {
    /// Text shown on the card: `display` wins over `value`, and a card with
    /// neither renders the "-" placeholder. Empty strings count as absent.
    pub fn display_text(&self) -> &str {
        if let Some(display) = &self.display {
            if !display.is_empty() {
                return display;
            }
        }
        if !self.value.is_empty() {
            return &self.value;
        }
        "-"
    }
}

/// A titled report table. Rendering is positional; row cell counts are not
/// validated against the header count.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportTable {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}
