use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_entry_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Input is locked until the store answers.
    if app.form.is_submitting() {
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.form.toggle_field();
        }
        KeyCode::Left => app.form.move_cursor(true),
        KeyCode::Right => app.form.move_cursor(false),
        KeyCode::Home => app.form.cursor_home_end(true),
        KeyCode::End => app.form.cursor_home_end(false),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.input_char(c);
        }
        KeyCode::Enter => {
            if let Some(request) = app.form.begin_submit() {
                enqueue_action(action_tx, Action::SubmitEntry(request));
            }
        }
        KeyCode::Esc => app.form.cancel(),
        _ => {}
    }
}
