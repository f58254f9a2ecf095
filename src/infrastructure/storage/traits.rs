//! Storage medium trait definition

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Persistent key/value medium the record store writes through.
///
/// Collections are stored as JSON-array text under a fixed key per entity
/// type. `set_many` must apply the whole batch atomically: either every
/// entry is persisted or none is.
#[async_trait]
pub trait StorageMedium: Send + Sync {
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;
    async fn set(&self, key: &str, value: String) -> DomainResult<()>;
    async fn set_many(&self, entries: Vec<(String, String)>) -> DomainResult<()>;
    async fn remove(&self, key: &str) -> DomainResult<()>;
    async fn remove_many(&self, keys: &[&str]) -> DomainResult<()>;
}
