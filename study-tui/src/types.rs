use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Store-assigned identifier of a study record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted study session.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    /// Whole hours spent.
    pub time: u32,
    pub created_at: Option<OffsetDateTime>,
}

impl Entry {
    pub fn new(id: impl Into<String>, title: impl Into<String>, time: u32) -> Self {
        Self {
            id: EntryId::new(id),
            title: title.into(),
            time,
            created_at: None,
        }
    }
}

/// A study session that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub title: String,
    pub time: u32,
}

/// Sum of hours across entries. Widened so a long history cannot overflow.
pub fn total_hours(entries: &[Entry]) -> u64 {
    entries.iter().map(|e| u64::from(e.time)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_hours_sums_every_entry() {
        let entries = vec![Entry::new("1", "A", 10), Entry::new("2", "B", 20)];
        assert_eq!(total_hours(&entries), 30);
    }

    #[test]
    fn total_hours_of_empty_list_is_zero() {
        assert_eq!(total_hours(&[]), 0);
    }

    #[test]
    fn total_hours_does_not_overflow_u32() {
        let entries = vec![Entry::new("1", "A", u32::MAX), Entry::new("2", "B", 1)];
        assert_eq!(total_hours(&entries), u64::from(u32::MAX) + 1);
    }
}
