use crate::app::SubmitRequest;
use crate::types::EntryId;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that needs the gateway. Busy flags are already set when an action is queued.
#[derive(Debug, Clone)]
pub(super) enum Action {
    Refresh,
    SubmitEntry(SubmitRequest),
    DeleteEntry(EntryId),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
