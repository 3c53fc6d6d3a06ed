// Terminal-local cursor state
use crate::application::settings_editor::SettingField;

/// Selection and edit cursor for the settings table. This is presentation
/// state only; the core panels know nothing about it.
#[derive(Debug)]
pub struct ScreenState {
    pub selected_row: usize,
    pub selected_field: SettingField,
    pub editing: bool,
}

impl ScreenState {
    pub fn new() -> Self {
        Self {
            selected_row: 0,
            selected_field: SettingField::Key,
            editing: false,
        }
    }

    /// Keep the selection inside the current row count; rows can disappear
    /// underneath the cursor on removal or reload.
    pub fn clamp(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected_row = 0;
            self.editing = false;
        } else if self.selected_row >= row_count {
            self.selected_row = row_count - 1;
        }
    }

    pub fn next_field(&mut self) {
        self.selected_field = match self.selected_field {
            SettingField::Key => SettingField::Value,
            SettingField::Value => SettingField::Notes,
            SettingField::Notes => SettingField::Key,
        };
    }

    pub fn prev_field(&mut self) {
        self.selected_field = match self.selected_field {
            SettingField::Key => SettingField::Notes,
            SettingField::Value => SettingField::Key,
            SettingField::Notes => SettingField::Value,
        };
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}
