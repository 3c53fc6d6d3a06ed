// Setting entry domain model
use serde::{Deserialize, Serialize};

/// One key/value configuration row. `key` is the conceptual identifier but
/// uniqueness is not enforced here; duplicates are allowed to reach the
/// backend unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingEntry {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub notes: String,
}

impl SettingEntry {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            notes: notes.into(),
        }
    }
}
