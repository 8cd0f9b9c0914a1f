mod client;
mod dev_backend;
mod dto;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{Entry, EntryId, NewEntry};

pub use client::SupabaseClient;
pub use dev_backend::DevBackend;

/// Any failure reported by the record store. The message is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<anyhow::Error> for GatewayError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(format!("{err:#}"))
    }
}

/// Remote persistence for study records.
///
/// Implementations must not retry; callers treat every error the same way.
#[async_trait]
pub trait EntryGateway: Send + Sync {
    /// All records, oldest first.
    async fn list(&self) -> Result<Vec<Entry>, GatewayError>;

    async fn create(&self, entry: &NewEntry) -> Result<(), GatewayError>;

    /// Replace title and time of the record with `entry.id`.
    async fn update(&self, entry: &Entry) -> Result<(), GatewayError>;

    async fn delete(&self, id: &EntryId) -> Result<(), GatewayError>;
}
