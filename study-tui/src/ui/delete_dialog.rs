use super::utils::{centered_rect, hours_label};
use super::*;

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App) {
    let (label, detail) = match app.delete.target().and_then(|id| app.list.find(id)) {
        Some(entry) => (entry.title.clone(), hours_label(u64::from(entry.time))),
        None => (String::from("(record no longer listed)"), String::new()),
    };

    let area = centered_rect(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let prompt = if app.delete.is_deleting() {
        Line::from(Span::styled("Deleting…", Style::default().fg(Color::Yellow)))
    } else {
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::White)),
        ])
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(label, Style::default().fg(Color::White))),
        Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        prompt,
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Delete Record? ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
