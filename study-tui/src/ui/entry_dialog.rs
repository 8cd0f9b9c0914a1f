use super::utils::centered_rect;
use super::*;
use crate::app::{DialogMode, FormField, TextInput};
use crate::validation::ValidationError;

pub fn render_entry_dialog(frame: &mut Frame, app: &App) {
    let Some(fields) = app.form.fields() else {
        return;
    };
    let errors = app.form.errors();
    let submitting = app.form.is_submitting();
    let title = match app.form.mode() {
        Some(DialogMode::Edit(_)) => " Edit Record ",
        _ => " New Record ",
    };

    let area = centered_rect(56, 12, frame.area());
    frame.render_widget(Clear, area);

    let mut text = vec![Line::from("")];
    text.extend(field_lines(
        "Study content",
        &fields.title,
        fields.focused == FormField::Title && !submitting,
        errors.title,
    ));
    text.push(Line::from(""));
    text.extend(field_lines(
        "Hours",
        &fields.time,
        fields.focused == FormField::Time && !submitting,
        errors.time,
    ));
    text.push(Line::from(""));
    text.push(if submitting {
        Line::from(Span::styled("Saving…", Style::default().fg(Color::Yellow)))
    } else if !errors.is_empty() {
        Line::from(Span::styled(
            "Fix the highlighted fields, then [Enter]",
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter] Save", Style::default().fg(Color::Green)),
            Span::raw("    "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::White)),
        ])
    });

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(paragraph, area);
}

fn field_lines<'a>(
    label: &'a str,
    input: &'a TextInput,
    focused: bool,
    error: Option<ValidationError>,
) -> Vec<Line<'a>> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = if focused {
        let (before, after) = input.split_at_cursor();
        Line::from(vec![
            Span::raw("> "),
            Span::styled(before, Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Yellow)),
            Span::styled(after, Style::default().fg(Color::White)),
        ])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(input.value.as_str(), Style::default().fg(Color::White)),
        ])
    };

    let mut label_line = vec![Span::styled(label, label_style)];
    if let Some(error) = error {
        label_line.push(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        ));
    }

    vec![Line::from(label_line), value]
}
