use ratatui::layout::{Constraint, Flex, Layout, Rect};
use std::sync::OnceLock;
use time::{OffsetDateTime, UtcOffset};

/// Rectangle of `width` x `height` centered in `area`, shrunk to fit when `area` is smaller.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Read the local UTC offset. `time` refuses to do this once other threads
/// exist, so call it from `main` before the tokio runtime is built.
pub fn capture_local_offset() {
    match UtcOffset::current_local_offset() {
        Ok(offset) => {
            let _ = LOCAL_OFFSET.set(offset);
        }
        Err(err) => tracing::debug!("local offset unavailable, dates shown in UTC: {}", err),
    }
}

/// `YYYY-MM-DD` in the captured local offset, or UTC if none was captured.
pub fn local_date_label(dt: OffsetDateTime) -> String {
    date_label(dt, LOCAL_OFFSET.get().copied().unwrap_or(UtcOffset::UTC))
}

fn date_label(dt: OffsetDateTime, offset: UtcOffset) -> String {
    let date = dt.to_offset(offset).date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Hours rendered the same way everywhere: `1 hour`, `12 hours`.
pub fn hours_label(hours: u64) -> String {
    if hours == 1 {
        "1 hour".to_string()
    } else {
        format!("{} hours", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn centered_rect_shrinks_to_fit() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }

    #[test]
    fn hours_label_pluralizes() {
        assert_eq!(hours_label(0), "0 hours");
        assert_eq!(hours_label(1), "1 hour");
        assert_eq!(hours_label(80), "80 hours");
    }

    #[test]
    fn local_date_label_is_iso_date() {
        let label = local_date_label(datetime!(2024-11-01 12:00 UTC));
        assert_eq!(label.len(), 10);
        assert!(label.starts_with("2024-1"));
    }

    #[test]
    fn date_label_applies_the_offset() {
        let late_evening = datetime!(2024-11-01 23:30 UTC);
        assert_eq!(date_label(late_evening, UtcOffset::UTC), "2024-11-01");
        assert_eq!(date_label(late_evening, offset!(+2)), "2024-11-02");
        assert_eq!(date_label(datetime!(2024-11-01 00:30 UTC), offset!(-5)), "2024-10-31");
    }
}
