use crate::telemetry::{DraftField, SortKey};
use crate::ui::app::{App, Focus};
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route one key press. Modal layers (alert, confirmation) take precedence
/// over the focused panel.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.alert().is_some() {
        app.dismiss_alert();
        return;
    }

    if app.confirm_dialog().is_visible() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.confirm_delete();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    match app.focus() {
        Focus::Table => handle_table_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('r') | KeyCode::F(5) => {
            app.request_refresh();
        }
        KeyCode::Char('t') => app.sort_by(SortKey::Timestamp),
        KeyCode::Char('a') => app.sort_by(SortKey::Altitude),
        KeyCode::Char('v') => app.sort_by(SortKey::Velocity),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('d') | KeyCode::Delete => {
            app.request_delete_selected();
        }
        KeyCode::Tab | KeyCode::Char('i') => app.set_focus(Focus::Form),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let on_status = app.form().focused == DraftField::Status;
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::Table),
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::NextField),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::PrevField),
        KeyCode::Right => app.dispatch_form(FormIntent::NextStatus),
        KeyCode::Left => app.dispatch_form(FormIntent::PrevStatus),
        KeyCode::Char(' ') if on_status => app.dispatch_form(FormIntent::NextStatus),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::Input(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
