use super::*;
use crate::notify::{Notification, NotificationKind};

const TOAST_WIDTH: u16 = 44;

fn kind_style(kind: NotificationKind) -> (Color, &'static str) {
    match kind {
        NotificationKind::Info => (Color::Cyan, "i"),
        NotificationKind::Success => (Color::Green, "✓"),
        NotificationKind::Warning => (Color::Yellow, "!"),
        NotificationKind::Error => (Color::Red, "✗"),
    }
}

/// Stack the newest toasts in the top-right corner, below the header.
pub fn render_toasts(frame: &mut Frame, app: &App) {
    let screen = frame.area();
    if screen.width < TOAST_WIDTH + 2 {
        return;
    }

    let x = screen.right() - TOAST_WIDTH - 1;
    let mut y = screen.y + 3;
    for notification in app.toasts.visible() {
        if y + 3 > screen.bottom() {
            break;
        }
        let area = Rect::new(x, y, TOAST_WIDTH, 3);
        frame.render_widget(Clear, area);
        frame.render_widget(toast_widget(notification), area);
        y += 3;
    }
}

fn toast_widget(notification: &Notification) -> Paragraph<'_> {
    let (color, icon) = kind_style(notification.kind);
    Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", icon),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            notification.message.as_str(),
            Style::default().fg(Color::White),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    )
}
