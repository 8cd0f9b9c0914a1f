use std::collections::HashSet;

use crate::api::EntryGateway;
use crate::notify::{Notification, Notifier};
use crate::types::{total_hours, Entry, EntryId};

pub const LIST_FETCH_FAILED: &str = "Could not load study records";

/// The local copy of the record table plus its aggregate.
///
/// Only [`EntryList::refresh`] changes the collection, and it always replaces it wholesale.
#[derive(Debug, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
    total_hours: u64,
    is_loading: bool,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn total_hours(&self) -> u64 {
        self.total_hours
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Flag a refresh as pending so the next frame shows the loading indicator.
    pub fn mark_loading(&mut self) {
        self.is_loading = true;
    }

    /// Re-fetch every record. On failure the previous collection is kept.
    pub async fn refresh<G>(&mut self, gateway: &G, notifier: &mut dyn Notifier)
    where
        G: EntryGateway + ?Sized,
    {
        self.is_loading = true;
        match gateway.list().await {
            Ok(entries) => {
                self.replace(entries);
                tracing::debug!(
                    count = self.entries.len(),
                    total_hours = self.total_hours,
                    "records refreshed"
                );
            }
            Err(err) => {
                tracing::error!("Failed to list records: {}", err.message());
                notifier.notify(Notification::error(LIST_FETCH_FAILED));
            }
        }
        self.is_loading = false;
    }

    fn replace(&mut self, entries: Vec<Entry>) {
        let mut seen = HashSet::with_capacity(entries.len());
        self.entries = entries
            .into_iter()
            .filter(|entry| {
                let fresh = seen.insert(entry.id.clone());
                if !fresh {
                    tracing::warn!(id = %entry.id, "dropping duplicate record");
                }
                fresh
            })
            .collect();
        self.total_hours = total_hours(&self.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{MockGateway, Op};
    use crate::notify::{NotificationKind, Toasts};

    fn seeded() -> MockGateway {
        MockGateway::with_entries(vec![Entry::new("1", "A", 10), Entry::new("2", "B", 20)])
    }

    #[tokio::test]
    async fn refresh_populates_entries_and_total() {
        let gateway = seeded();
        let mut toasts = Toasts::new();
        let mut list = EntryList::new();

        list.refresh(&gateway, &mut toasts).await;

        assert_eq!(list.len(), 2);
        assert_eq!(list.total_hours(), 30);
        assert!(!list.is_loading());
        assert_eq!(toasts.len(), 0);
        assert_eq!(gateway.count(Op::List), 1);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_last_known_good_collection() {
        let gateway = seeded();
        let mut toasts = Toasts::new();
        let mut list = EntryList::new();
        list.refresh(&gateway, &mut toasts).await;

        gateway.fail(Op::List);
        list.refresh(&gateway, &mut toasts).await;

        assert_eq!(list.len(), 2);
        assert_eq!(list.total_hours(), 30);
        assert!(!list.is_loading());
        let messages = toasts.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, NotificationKind::Error);
        assert_eq!(messages[0].message, LIST_FETCH_FAILED);
    }

    #[tokio::test]
    async fn duplicate_ids_are_dropped() {
        let gateway = MockGateway::with_entries(vec![
            Entry::new("1", "A", 10),
            Entry::new("1", "A again", 99),
            Entry::new("2", "B", 5),
        ]);
        let mut toasts = Toasts::new();
        let mut list = EntryList::new();

        list.refresh(&gateway, &mut toasts).await;

        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0].title, "A");
        assert_eq!(list.total_hours(), 15);
    }

    #[tokio::test]
    async fn find_looks_up_by_id() {
        let gateway = seeded();
        let mut toasts = Toasts::new();
        let mut list = EntryList::new();
        list.refresh(&gateway, &mut toasts).await;

        assert_eq!(list.find(&EntryId::new("2")).map(|e| e.time), Some(20));
        assert!(list.find(&EntryId::new("3")).is_none());
    }

    #[test]
    fn mark_loading_sets_flag() {
        let mut list = EntryList::new();
        assert!(!list.is_loading());
        list.mark_loading();
        assert!(list.is_loading());
        assert!(list.is_empty());
    }
}
