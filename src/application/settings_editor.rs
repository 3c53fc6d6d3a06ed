// Settings editor - editable key/value rows
use crate::application::gateway::{GatewayError, GatewayResult};
use crate::application::notifier::Notice;
use crate::domain::settings::SettingEntry;

/// Opaque, stable identity for one editable row. Survives edits and the
/// removal of other rows, so callers never address rows by display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Key,
    Value,
    Notes,
}

#[derive(Debug, Clone)]
pub struct EditableRow {
    pub id: RowId,
    pub entry: SettingEntry,
}

/// In-memory editable copy of the backend's settings. Independent of the
/// backend until an explicit save; add/remove/edit never trigger a call.
#[derive(Debug, Default)]
pub struct SettingsEditor {
    rows: Vec<EditableRow>,
    next_id: u64,
    loading: bool,
}

impl SettingsEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply a completed fetch. Success replaces every row; an empty result
    /// seeds one blank row so the editor never shows zero rows. Failure
    /// leaves the operator's rows untouched.
    pub fn finish_load(&mut self, outcome: GatewayResult<Vec<SettingEntry>>) -> Option<Notice> {
        self.loading = false;
        match outcome {
            Ok(entries) => {
                self.rows.clear();
                for entry in entries {
                    self.push_row(entry);
                }
                if self.rows.is_empty() {
                    self.push_row(SettingEntry::default());
                }
                None
            }
            Err(GatewayError::Rejected) => Some(Notice::error("Unable to load settings.")),
            Err(GatewayError::Transport(message)) => Some(Notice::error(message)),
        }
    }

    pub fn finish_save(&mut self, outcome: GatewayResult<()>) -> Option<Notice> {
        match outcome {
            Ok(()) => Some(Notice::success("Settings saved.")),
            Err(GatewayError::Rejected) => Some(Notice::error("Unable to save settings.")),
            Err(GatewayError::Transport(message)) => Some(Notice::error(message)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn rows(&self) -> &[EditableRow] {
        &self.rows
    }

    pub fn add_row(&mut self) -> RowId {
        self.push_row(SettingEntry::default())
    }

    /// Removes exactly the referenced row; an unknown id is a no-op.
    pub fn remove_row(&mut self, id: RowId) {
        self.rows.retain(|row| row.id != id);
    }

    pub fn set_field(&mut self, id: RowId, field: SettingField, text: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            match field {
                SettingField::Key => row.entry.key = text,
                SettingField::Value => row.entry.value = text,
                SettingField::Notes => row.entry.notes = text,
            }
        }
    }

    pub fn field(&self, id: RowId, field: SettingField) -> Option<&str> {
        self.rows.iter().find(|row| row.id == id).map(|row| match field {
            SettingField::Key => row.entry.key.as_str(),
            SettingField::Value => row.entry.value.as_str(),
            SettingField::Notes => row.entry.notes.as_str(),
        })
    }

    /// Rows as submitted to the backend: keys trimmed, rows whose trimmed key
    /// is blank silently dropped, value/notes untouched. Order preserved.
    pub fn save_payload(&self) -> Vec<SettingEntry> {
        self.rows
            .iter()
            .filter_map(|row| {
                let key = row.entry.key.trim();
                if key.is_empty() {
                    return None;
                }
                Some(SettingEntry::new(
                    key,
                    row.entry.value.clone(),
                    row.entry.notes.clone(),
                ))
            })
            .collect()
    }

    fn push_row(&mut self, entry: SettingEntry) -> RowId {
        self.next_id += 1;
        let id = RowId(self.next_id);
        self.rows.push(EditableRow { id, entry });
        id
    }
}
