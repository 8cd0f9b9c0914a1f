use super::utils::{hours_label, local_date_label};
use super::*;
use crate::types::Entry;

pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            " Study Log ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .title(
            Line::from(Span::styled(
                format!(" {} ", app.source_label),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        )
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(inner);

    let total = Line::from(vec![
        Span::styled("Total ", Style::default().fg(Color::Gray)),
        Span::styled(
            hours_label(app.list.total_hours()),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ·  {} records", app.list.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(total), cols[0]);

    if app.list.is_loading() {
        let throbber = throbber_widgets_tui::Throbber::default()
            .label("Loading")
            .style(Style::default().fg(Color::Yellow))
            .throbber_style(Style::default().fg(Color::Yellow))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        frame.render_stateful_widget(throbber, cols[1], &mut app.throbber_state);
    }
}

pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(" Records ", Style::default().fg(Color::White)))
        .padding(Padding::horizontal(1));

    if app.list.is_empty() {
        let message = if app.list.is_loading() {
            "Loading records…"
        } else {
            "No study records yet. Press [a] to add one."
        };
        let empty_msg = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty_msg, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_rows = inner.height as usize;
    app.list_view_height = max_rows;
    let total_rows = app.list.len();

    // Keep the focused row inside the visible window.
    if let Some(focused) = app.focused_index {
        if focused >= app.list_scroll + max_rows {
            app.list_scroll = focused + 1 - max_rows;
        }
        if focused < app.list_scroll {
            app.list_scroll = focused;
        }
    }
    if total_rows <= max_rows {
        app.list_scroll = 0;
    } else if app.list_scroll > total_rows - max_rows {
        app.list_scroll = total_rows - max_rows;
    }

    let lines: Vec<Line> = app
        .list
        .entries()
        .iter()
        .enumerate()
        .skip(app.list_scroll)
        .take(max_rows)
        .map(|(idx, entry)| build_entry_row(entry, app.focused_index == Some(idx)))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn build_entry_row(entry: &Entry, is_focused: bool) -> Line<'_> {
    let date = entry
        .created_at
        .map(local_date_label)
        .unwrap_or_else(|| " ".repeat(10));
    let hours = format!("{:>4}h", entry.time);

    let line = Line::from(vec![
        Span::styled(date, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(hours, Style::default().fg(Color::Magenta)),
        Span::raw("  "),
        Span::styled(entry.title.as_str(), Style::default().fg(Color::White)),
    ]);

    if is_focused {
        line.style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        line
    }
}
