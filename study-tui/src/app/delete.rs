use crate::api::EntryGateway;
use crate::app::form::TARGET_NOT_FOUND;
use crate::app::list::EntryList;
use crate::notify::{Notification, Notifier};
use crate::types::EntryId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum DeleteDialog {
    #[default]
    Idle,
    Confirming(EntryId),
    Deleting(EntryId),
}

/// Delete confirmation: `Idle -> Confirming -> Deleting -> Idle`.
#[derive(Debug, Default)]
pub struct DeleteConfirm {
    dialog: DeleteDialog,
}

impl DeleteConfirm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.dialog, DeleteDialog::Idle)
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.dialog, DeleteDialog::Deleting(_))
    }

    pub fn target(&self) -> Option<&EntryId> {
        match &self.dialog {
            DeleteDialog::Idle => None,
            DeleteDialog::Confirming(id) | DeleteDialog::Deleting(id) => Some(id),
        }
    }

    pub fn request_delete(&mut self, id: EntryId) {
        if self.is_deleting() {
            return;
        }
        self.dialog = DeleteDialog::Confirming(id);
    }

    pub fn cancel(&mut self) {
        if let DeleteDialog::Confirming(_) = self.dialog {
            self.dialog = DeleteDialog::Idle;
        }
    }

    /// Move to deleting and hand back the id to delete. Without a pending target,
    /// or when the target is gone from the local list, the dialog closes instead.
    pub fn begin_confirm(
        &mut self,
        list: &EntryList,
        notifier: &mut dyn Notifier,
    ) -> Option<EntryId> {
        let target = match std::mem::take(&mut self.dialog) {
            DeleteDialog::Confirming(id) => Some(id),
            DeleteDialog::Idle => None,
            deleting @ DeleteDialog::Deleting(_) => {
                self.dialog = deleting;
                return None;
            }
        };

        match target {
            Some(id) if list.find(&id).is_some() => {
                self.dialog = DeleteDialog::Deleting(id.clone());
                Some(id)
            }
            other => {
                tracing::warn!(pending = ?other, "delete confirmed without a known record");
                notifier.notify(Notification::warning(TARGET_NOT_FOUND));
                None
            }
        }
    }

    /// Delete `id`, report the outcome, close the dialog and re-fetch the list.
    pub async fn complete_confirm<G>(
        &mut self,
        id: EntryId,
        gateway: &G,
        list: &mut EntryList,
        notifier: &mut dyn Notifier,
    ) where
        G: EntryGateway + ?Sized,
    {
        match gateway.delete(&id).await {
            Ok(()) => notifier.notify(Notification::success("Study record deleted")),
            Err(err) => {
                tracing::error!("Failed to delete record {}: {}", id, err);
                notifier.notify(Notification::error("Could not delete study record"));
            }
        }
        self.dialog = DeleteDialog::Idle;
        list.refresh(gateway, notifier).await;
    }

    /// Both phases back to back. The event loop runs them on separate frames instead.
    #[cfg(test)]
    pub async fn confirm<G>(
        &mut self,
        gateway: &G,
        list: &mut EntryList,
        notifier: &mut dyn Notifier,
    ) where
        G: EntryGateway + ?Sized,
    {
        if let Some(id) = self.begin_confirm(list, notifier) {
            self.complete_confirm(id, gateway, list, notifier).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{Call, MockGateway, Op};
    use crate::notify::{NotificationKind, Toasts};
    use crate::types::Entry;

    async fn loaded(gateway: &MockGateway, toasts: &mut Toasts) -> EntryList {
        let mut list = EntryList::new();
        list.refresh(gateway, toasts).await;
        gateway.clear_calls();
        list
    }

    fn seeded() -> MockGateway {
        MockGateway::with_entries(vec![Entry::new("1", "A", 10), Entry::new("2", "B", 20)])
    }

    #[tokio::test]
    async fn confirm_deletes_and_refreshes() {
        let gateway = seeded();
        let mut toasts = Toasts::new();
        let mut list = loaded(&gateway, &mut toasts).await;
        let mut confirm = DeleteConfirm::new();

        confirm.request_delete(EntryId::new("2"));
        assert!(confirm.is_open());
        assert_eq!(confirm.target(), Some(&EntryId::new("2")));

        confirm.confirm(&gateway, &mut list, &mut toasts).await;

        assert_eq!(
            gateway.calls(),
            vec![Call::Delete(EntryId::new("2")), Call::List]
        );
        assert!(!confirm.is_open());
        assert_eq!(confirm.target(), None);
        assert_eq!(list.len(), 1);
        assert_eq!(list.total_hours(), 10);
        assert_eq!(toasts.messages()[0].kind, NotificationKind::Success);
    }

    #[tokio::test]
    async fn confirm_without_target_makes_no_call() {
        let gateway = seeded();
        let mut toasts = Toasts::new();
        let mut list = loaded(&gateway, &mut toasts).await;
        let mut confirm = DeleteConfirm::new();

        confirm.confirm(&gateway, &mut list, &mut toasts).await;

        assert!(gateway.calls().is_empty());
        assert!(!confirm.is_open());
        let messages = toasts.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, TARGET_NOT_FOUND);
    }

    #[tokio::test]
    async fn confirm_for_record_missing_locally_makes_no_call() {
        let gateway = seeded();
        let mut toasts = Toasts::new();
        let mut list = loaded(&gateway, &mut toasts).await;
        let mut confirm = DeleteConfirm::new();

        confirm.request_delete(EntryId::new("77"));
        confirm.confirm(&gateway, &mut list, &mut toasts).await;

        assert!(gateway.calls().is_empty());
        assert!(!confirm.is_open());
        assert_eq!(toasts.len(), 1);
    }

    #[tokio::test]
    async fn cancel_clears_target_without_calls() {
        let gateway = seeded();
        let mut toasts = Toasts::new();
        let mut list = loaded(&gateway, &mut toasts).await;
        let mut confirm = DeleteConfirm::new();

        confirm.request_delete(EntryId::new("1"));
        confirm.cancel();
        assert!(!confirm.is_open());
        assert_eq!(confirm.target(), None);

        confirm.confirm(&gateway, &mut list, &mut toasts).await;
        assert_eq!(gateway.count(Op::Delete), 0);
    }

    #[tokio::test]
    async fn failed_delete_closes_and_refreshes() {
        let gateway = seeded();
        let mut toasts = Toasts::new();
        let mut list = loaded(&gateway, &mut toasts).await;
        let mut confirm = DeleteConfirm::new();
        gateway.fail(Op::Delete);

        confirm.request_delete(EntryId::new("1"));
        confirm.confirm(&gateway, &mut list, &mut toasts).await;

        assert!(!confirm.is_open());
        assert_eq!(gateway.count(Op::List), 1);
        assert_eq!(list.len(), 2);
        let messages = toasts.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, NotificationKind::Error);

        gateway.recover();
        confirm.request_delete(EntryId::new("1"));
        confirm.confirm(&gateway, &mut list, &mut toasts).await;
        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn deleting_state_ignores_cancel_and_new_requests() {
        let gateway = seeded();
        let mut toasts = Toasts::new();
        let mut list = loaded(&gateway, &mut toasts).await;
        let mut confirm = DeleteConfirm::new();

        confirm.request_delete(EntryId::new("1"));
        let id = confirm.begin_confirm(&list, &mut toasts).unwrap();
        assert!(confirm.is_deleting());

        confirm.cancel();
        confirm.request_delete(EntryId::new("2"));
        assert_eq!(confirm.target(), Some(&EntryId::new("1")));
        assert!(confirm.begin_confirm(&list, &mut toasts).is_none());

        confirm
            .complete_confirm(id, &gateway, &mut list, &mut toasts)
            .await;
        assert!(!confirm.is_deleting());
        assert_eq!(gateway.count(Op::Delete), 1);
    }
}
