use crate::api::EntryGateway;
use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    gateway: &dyn EntryGateway,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    // Initial mount: load the list once.
    app.list.mark_loading();
    let _ = action_tx.send(Action::Refresh);

    loop {
        app.toasts.prune(Instant::now());
        if app.list.is_loading() {
            app.throbber_state.calc_next();
        }

        terminal.draw(|f| ui::render(f, app))?;

        // One action per frame so busy flags set by the key handler get drawn first.
        if let Ok(action) = action_rx.try_recv() {
            run_action(action, app, gateway).await;
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
