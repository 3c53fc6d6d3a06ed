// Key-gesture translation into controller actions
use crate::application::controller::{Action, AppController};
use crate::application::settings_editor::RowId;
use crate::domain::view::ViewId;
use crate::presentation::screen::ScreenState;
use crossterm::event::KeyCode;

/// What a key press amounts to. The core only ever sees `Dispatch`ed
/// actions; everything else stays inside the terminal surface.
#[derive(Debug)]
pub enum Gesture {
    Quit,
    Dispatch(Action),
    Noop,
}

pub fn translate(key: KeyCode, screen: &mut ScreenState, controller: &AppController) -> Gesture {
    screen.clamp(controller.settings.rows().len());

    if screen.editing && controller.router.is_active(ViewId::Settings) {
        return translate_editing(key, screen, controller);
    }

    match key {
        KeyCode::Char('q') => Gesture::Quit,
        KeyCode::Char('1') => Gesture::Dispatch(Action::Activate(ViewId::Dashboard)),
        KeyCode::Char('2') => Gesture::Dispatch(Action::Activate(ViewId::Settings)),
        KeyCode::Char('3') => Gesture::Dispatch(Action::Activate(ViewId::Logs)),
        KeyCode::Char('r') => Gesture::Dispatch(match controller.router.active() {
            ViewId::Dashboard => Action::RefreshDashboard,
            ViewId::Settings => Action::LoadSettings,
            ViewId::Logs => Action::LoadLogs,
        }),
        _ if controller.router.is_active(ViewId::Settings) => {
            translate_settings(key, screen, controller)
        }
        _ => Gesture::Noop,
    }
}

fn translate_settings(
    key: KeyCode,
    screen: &mut ScreenState,
    controller: &AppController,
) -> Gesture {
    match key {
        KeyCode::Up => {
            screen.selected_row = screen.selected_row.saturating_sub(1);
            Gesture::Noop
        }
        KeyCode::Down => {
            let last = controller.settings.rows().len().saturating_sub(1);
            screen.selected_row = (screen.selected_row + 1).min(last);
            Gesture::Noop
        }
        KeyCode::Left => {
            screen.prev_field();
            Gesture::Noop
        }
        KeyCode::Right | KeyCode::Tab => {
            screen.next_field();
            Gesture::Noop
        }
        KeyCode::Enter => {
            if selected_row_id(screen, controller).is_some() {
                screen.editing = true;
            }
            Gesture::Noop
        }
        KeyCode::Char('a') => Gesture::Dispatch(Action::AddSettingRow),
        KeyCode::Char('x') | KeyCode::Delete => match selected_row_id(screen, controller) {
            Some(id) => Gesture::Dispatch(Action::RemoveSettingRow(id)),
            None => Gesture::Noop,
        },
        KeyCode::Char('s') => Gesture::Dispatch(Action::SaveSettings),
        _ => Gesture::Noop,
    }
}

fn translate_editing(
    key: KeyCode,
    screen: &mut ScreenState,
    controller: &AppController,
) -> Gesture {
    let Some(row) = selected_row_id(screen, controller) else {
        screen.editing = false;
        return Gesture::Noop;
    };
    let field = screen.selected_field;
    let current = controller.settings.field(row, field).unwrap_or("").to_string();

    match key {
        KeyCode::Esc | KeyCode::Enter => {
            screen.editing = false;
            Gesture::Noop
        }
        KeyCode::Tab => {
            screen.next_field();
            Gesture::Noop
        }
        KeyCode::Char(ch) => {
            let mut text = current;
            text.push(ch);
            Gesture::Dispatch(Action::EditSetting { row, field, text })
        }
        KeyCode::Backspace => {
            let mut text = current;
            text.pop();
            Gesture::Dispatch(Action::EditSetting { row, field, text })
        }
        _ => Gesture::Noop,
    }
}

fn selected_row_id(screen: &ScreenState, controller: &AppController) -> Option<RowId> {
    controller
        .settings
        .rows()
        .get(screen.selected_row)
        .map(|row| row.id)
}
