//! Ordered in-memory record store with soft-delete semantics.
//!
//! Backs the `InMemory*Repository` types of the domain crates.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Lifecycle;

/// A persisted entity the in-memory store can manage
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> Uuid;
    fn lifecycle(&self) -> Lifecycle;
    fn set_lifecycle(&mut self, lifecycle: Lifecycle);
    fn set_updated_at(&mut self, at: DateTime<Utc>);
}

/// Cloning shares the underlying storage.
#[derive(Debug, Clone)]
pub struct InMemoryCollection<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Record> InMemoryCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: T) -> T {
        self.records.write().await.push(record.clone());
        record
    }

    pub async fn find_live(&self, id: Uuid) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id && r.lifecycle().is_active())
            .cloned()
    }

    /// Replace the live record sharing `record`'s id. The stored lifecycle
    /// is kept and `updated_at` is stamped.
    pub async fn replace_live(&self, mut record: T) -> Option<T> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id() && r.lifecycle().is_active())?;

        record.set_lifecycle(slot.lifecycle());
        record.set_updated_at(Utc::now());
        *slot = record.clone();
        Some(record)
    }

    /// Mark the live record `Deleted` and return it as stored afterwards.
    pub async fn mark_deleted(&self, id: Uuid) -> Option<T> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id && r.lifecycle().is_active())?;

        slot.set_lifecycle(Lifecycle::deleted_now());
        Some(slot.clone())
    }

    /// Every stored record, deleted ones included
    #[cfg(test)]
    pub(crate) async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }
}
