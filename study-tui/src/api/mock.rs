//! Recording gateway for controller tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::api::{DevBackend, EntryGateway, GatewayError};
use crate::types::{Entry, EntryId, NewEntry};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(NewEntry),
    Update(Entry),
    Delete(EntryId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

/// Wraps a [`DevBackend`], records every call and can be told to fail an operation.
#[derive(Clone, Default)]
pub struct MockGateway {
    backend: DevBackend,
    calls: Arc<Mutex<Vec<Call>>>,
    failing: Arc<Mutex<Vec<Op>>>,
}

impl MockGateway {
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            backend: DevBackend::with_entries(entries),
            ..Self::default()
        }
    }

    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().push(op);
    }

    pub fn recover(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls()
            .iter()
            .filter(|call| {
                matches!(
                    (call, op),
                    (Call::List, Op::List)
                        | (Call::Create(_), Op::Create)
                        | (Call::Update(_), Op::Update)
                        | (Call::Delete(_), Op::Delete)
                )
            })
            .count()
    }

    fn record(&self, call: Call, op: Op) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(GatewayError::new(format!("{op:?} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl EntryGateway for MockGateway {
    async fn list(&self) -> Result<Vec<Entry>, GatewayError> {
        self.record(Call::List, Op::List)?;
        self.backend.list().await
    }

    async fn create(&self, entry: &NewEntry) -> Result<(), GatewayError> {
        self.record(Call::Create(entry.clone()), Op::Create)?;
        self.backend.create(entry).await
    }

    async fn update(&self, entry: &Entry) -> Result<(), GatewayError> {
        self.record(Call::Update(entry.clone()), Op::Update)?;
        self.backend.update(entry).await
    }

    async fn delete(&self, id: &EntryId) -> Result<(), GatewayError> {
        self.record(Call::Delete(id.clone()), Op::Delete)?;
        self.backend.delete(id).await
    }
}
