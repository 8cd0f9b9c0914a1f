use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use time::{Duration, OffsetDateTime};

use crate::api::{EntryGateway, GatewayError};
use crate::types::{Entry, EntryId, NewEntry};

/// In-memory record store used by `study-tui dev` and by tests.
///
/// Mirrors PostgREST semantics: updating or deleting an unknown id is a no-op.
#[derive(Debug, Clone, Default)]
pub struct DevBackend {
    store: Arc<Mutex<DevStore>>,
}

#[derive(Debug, Default)]
struct DevStore {
    rows: Vec<Entry>,
    next_id: u64,
}

impl DevBackend {
    /// Backend pre-filled with a few sample sessions.
    pub fn new() -> Self {
        Self::with_entries(seed_dev_records())
    }

    /// Backend holding exactly `entries`; new ids continue after the largest numeric id.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let next_id = entries
            .iter()
            .filter_map(|e| e.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            store: Arc::new(Mutex::new(DevStore {
                rows: entries,
                next_id,
            })),
        }
    }

    pub fn snapshot(&self) -> Vec<Entry> {
        self.store.lock().expect("dev store lock poisoned").rows.clone()
    }
}

#[async_trait]
impl EntryGateway for DevBackend {
    async fn list(&self) -> Result<Vec<Entry>, GatewayError> {
        Ok(self.snapshot())
    }

    async fn create(&self, entry: &NewEntry) -> Result<(), GatewayError> {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        let id = store.next_id;
        store.next_id += 1;
        store.rows.push(Entry {
            id: EntryId::new(id.to_string()),
            title: entry.title.clone(),
            time: entry.time,
            created_at: Some(OffsetDateTime::now_utc()),
        });
        Ok(())
    }

    async fn update(&self, entry: &Entry) -> Result<(), GatewayError> {
        let mut store = self.store.lock().expect("dev store lock poisoned");
        if let Some(row) = store.rows.iter_mut().find(|row| row.id == entry.id) {
            row.title = entry.title.clone();
            row.time = entry.time;
        } else {
            tracing::debug!(id = %entry.id, "update matched no rows");
        }
        Ok(())
    }

    async fn delete(&self, id: &EntryId) -> Result<(), GatewayError> {
        self.store
            .lock()
            .expect("dev store lock poisoned")
            .rows
            .retain(|row| &row.id != id);
        Ok(())
    }
}

fn seed_dev_records() -> Vec<Entry> {
    let now = OffsetDateTime::now_utc();
    let entry = |idx: i64, title: &str, hours: u32| Entry {
        created_at: Some(now - Duration::days(4 - idx)),
        ..Entry::new(idx.to_string(), title, hours)
    };

    vec![
        entry(1, "The Rust Programming Language, ch. 1-4", 3),
        entry(2, "Ownership and borrowing exercises", 2),
        entry(3, "Async Rust with tokio", 4),
    ]
}
