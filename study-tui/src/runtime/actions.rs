use crate::api::EntryGateway;
use crate::app::App;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, gateway: &dyn EntryGateway) {
    tracing::debug!(?action, "running action");
    match action {
        Action::Refresh => {
            app.list.refresh(gateway, &mut app.toasts).await;
        }
        Action::SubmitEntry(request) => {
            app.form
                .complete_submit(request, gateway, &mut app.list, &mut app.toasts)
                .await;
        }
        Action::DeleteEntry(id) => {
            app.delete
                .complete_confirm(id, gateway, &mut app.list, &mut app.toasts)
                .await;
        }
    }
    app.clamp_focus();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, MockGateway, Op};
    use crate::types::{Entry, EntryId};

    fn seeded() -> MockGateway {
        MockGateway::with_entries(vec![Entry::new("1", "A", 10), Entry::new("2", "B", 20)])
    }

    #[tokio::test]
    async fn refresh_action_loads_and_focuses_first_row() {
        let gateway = seeded();
        let mut app = App::new("test");

        run_action(Action::Refresh, &mut app, &gateway).await;

        assert_eq!(app.list.total_hours(), 30);
        assert_eq!(app.focused_index, Some(0));
    }

    #[tokio::test]
    async fn delete_action_refreshes_and_clamps_focus() {
        let gateway = seeded();
        let mut app = App::new("test");
        run_action(Action::Refresh, &mut app, &gateway).await;
        app.select_next();

        app.request_delete_focused();
        let id = app.delete.begin_confirm(&app.list, &mut app.toasts).unwrap();
        assert_eq!(id, EntryId::new("2"));
        run_action(Action::DeleteEntry(id), &mut app, &gateway).await;

        assert_eq!(app.list.len(), 1);
        assert_eq!(app.focused_index, Some(0));
        assert_eq!(gateway.count(Op::Delete), 1);
        assert_eq!(gateway.calls().last(), Some(&Call::List));
    }

    #[tokio::test]
    async fn submit_action_writes_then_refreshes() {
        let gateway = seeded();
        let mut app = App::new("test");
        run_action(Action::Refresh, &mut app, &gateway).await;
        gateway.clear_calls();

        app.form.open_for_create();
        for c in "C".chars() {
            app.form.input_char(c);
        }
        let request = app.form.begin_submit().unwrap();
        run_action(Action::SubmitEntry(request), &mut app, &gateway).await;

        assert_eq!(gateway.count(Op::Create), 1);
        assert_eq!(gateway.count(Op::List), 1);
        assert_eq!(app.list.len(), 3);
        assert_eq!(app.list.total_hours(), 30);
        assert!(!app.form.is_open());
    }
}
