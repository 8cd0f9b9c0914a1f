use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::PageUp => app.page(false),
        KeyCode::PageDown => app.page(true),
        KeyCode::Char('a') | KeyCode::Char('n') => app.form.open_for_create(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_focused(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_focused(),
        KeyCode::Char('r') if !app.list.is_loading() => {
            app.list.mark_loading();
            enqueue_action(action_tx, Action::Refresh);
        }
        KeyCode::Char('x') => {
            app.toasts.dismiss_latest();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}
