use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod delete_dialog;
mod entry_dialog;
mod list_view;
mod toasts;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with total
            Constraint::Min(0),    // Records
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    list_view::render_header(frame, app, root[0]);
    list_view::render_list(frame, app, root[1]);
    render_key_hints(frame, app, root[2]);

    match app.current_view() {
        View::List => {}
        View::EntryForm => entry_dialog::render_entry_dialog(frame, app),
        View::ConfirmDelete => delete_dialog::render_delete_confirm_dialog(frame, app),
    }

    toasts::render_toasts(frame, app);
}

fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match app.current_view() {
        View::List => &[
            ("a", "add"),
            ("e", "edit"),
            ("d", "delete"),
            ("r", "refresh"),
            ("x", "dismiss"),
            ("j/k", "move"),
            ("q", "quit"),
        ],
        View::EntryForm => &[("Tab", "next field"), ("Enter", "save"), ("Esc", "cancel")],
        View::ConfirmDelete => &[("y", "delete"), ("n", "keep")],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(Color::Gray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
