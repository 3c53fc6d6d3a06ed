// Dashboard panel - KPI cards and report tables
use crate::application::gateway::{GatewayError, GatewayResult};
use crate::application::notifier::Notice;
use crate::domain::dashboard::DashboardData;

pub const NO_KPI_DATA: &str = "No data available.";
pub const NO_TABLE_ROWS: &str = "No data.";

/// Renderable KPI region: either one placeholder or one card per KPI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KpiRegion {
    Placeholder(&'static str),
    Cards(Vec<KpiCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCard {
    pub title: String,
    pub headers: Vec<String>,
    pub body: TableBody,
}

/// Table body: real rows, or a single placeholder row spanning every header
/// column (span 1 when the table has no headers either).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<Vec<String>>),
    Placeholder { text: &'static str, span: usize },
}

/// Owns the most recently fetched dashboard snapshot and the in-flight flag.
/// The flag drives mutually exclusive loader/content visibility; a completed
/// fetch always replaces the snapshot wholesale, so when responses overlap
/// the later completion wins.
#[derive(Debug, Default)]
pub struct DashboardPanel {
    loading: bool,
    data: Option<DashboardData>,
}

impl DashboardPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply a completed fetch. `announce` marks an operator-triggered
    /// refresh, which gets a confirmation notice; the initial load is silent.
    pub fn finish_load(
        &mut self,
        outcome: GatewayResult<DashboardData>,
        announce: bool,
    ) -> Option<Notice> {
        self.loading = false;
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                announce.then(|| Notice::info("Dashboard updated."))
            }
            Err(GatewayError::Rejected) => Some(Notice::error(if announce {
                "Invalid server response."
            } else {
                "Unable to load dashboard."
            })),
            Err(GatewayError::Transport(message)) => Some(Notice::error(message)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&DashboardData> {
        self.data.as_ref()
    }

    /// Caption under the view title; "-" until a snapshot carries a value.
    pub fn generated_at(&self) -> &str {
        match self.data.as_ref().map(|data| data.generated_at.as_str()) {
            Some(generated_at) if !generated_at.is_empty() => generated_at,
            _ => "-",
        }
    }

    pub fn kpi_region(&self) -> KpiRegion {
        let kpis = self.data.as_ref().map(|data| data.kpis.as_slice()).unwrap_or(&[]);
        if kpis.is_empty() {
            return KpiRegion::Placeholder(NO_KPI_DATA);
        }
        KpiRegion::Cards(
            kpis.iter()
                .map(|kpi| KpiCard {
                    label: kpi.label.clone(),
                    value: kpi.display_text().to_string(),
                })
                .collect(),
        )
    }

    pub fn table_cards(&self) -> Vec<TableCard> {
        let tables = self.data.as_ref().map(|data| data.tables.as_slice()).unwrap_or(&[]);
        tables
            .iter()
            .map(|table| {
                let body = if table.rows.is_empty() {
                    TableBody::Placeholder {
                        text: NO_TABLE_ROWS,
                        span: table.headers.len().max(1),
                    }
                } else {
                    TableBody::Rows(table.rows.clone())
                };
                TableCard {
                    title: table.title.clone(),
                    headers: table.headers.clone(),
                    body,
                }
            })
            .collect()
    }
}
