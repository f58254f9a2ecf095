//! Generic record store over a key/value medium

use std::sync::Arc;

use dashmap::DashMap;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::StorageMedium;
use crate::domain::DomainResult;

/// Fixed collection keys, one per entity type.
pub mod keys {
    pub const CUSTOMERS: &str = "customers";
    pub const DEVICES: &str = "devices";
    pub const PRODUCTS: &str = "products";
    pub const REPAIRS: &str = "repairs";
    pub const SALES: &str = "sales";
}

/// Outcome of a collection mutation closure.
pub enum Mutation<R> {
    /// Persist the modified collection and return the value.
    Commit(R),
    /// Leave the stored collection untouched and return the value.
    Skip(R),
}

/// Typed load/save of named JSON-array collections.
///
/// Each collection has its own async mutex; every read-modify-write runs
/// under that guard so overlapping mutations of the same collection cannot
/// clobber each other's appends. When an operation spans several
/// collections, guards are taken in key name order.
pub struct RecordStore {
    medium: Arc<dyn StorageMedium>,
    guards: DashMap<&'static str, Arc<Mutex<()>>>,
}

impl RecordStore {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self {
            medium,
            guards: DashMap::new(),
        }
    }

    /// Load a collection. Missing keys, medium read failures and malformed
    /// stored JSON all yield an empty collection; failures are logged but
    /// never surfaced to the caller.
    pub async fn load<T: DeserializeOwned>(&self, key: &'static str) -> Vec<T> {
        let raw = match self.medium.get(key).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read collection '{}': {}", key, e);
                return Vec::new();
            }
        };
        match raw {
            None => Vec::new(),
            Some(json) => match serde_json::from_str(&json) {
                Ok(items) => items,
                Err(e) => {
                    warn!(
                        "Malformed data in collection '{}', treating as empty: {}",
                        key, e
                    );
                    Vec::new()
                }
            },
        }
    }

    /// Serialize and write the whole collection, replacing any prior value.
    pub async fn save<T: Serialize>(&self, key: &'static str, items: &[T]) -> DomainResult<()> {
        let json = serde_json::to_string(items)?;
        self.medium.set(key, json).await
    }

    /// Write several already-serialized collections in one atomic batch.
    pub async fn save_batch(&self, batches: Vec<(&'static str, String)>) -> DomainResult<()> {
        self.medium
            .set_many(
                batches
                    .into_iter()
                    .map(|(key, json)| (key.to_string(), json))
                    .collect(),
            )
            .await
    }

    /// Acquire the mutation guard for a collection.
    pub async fn guard(&self, key: &'static str) -> OwnedMutexGuard<()> {
        let lock = self.guards.entry(key).or_default().clone();
        lock.lock_owned().await
    }

    /// Read-modify-write a single collection under its guard.
    ///
    /// The closure decides whether the collection is persisted
    /// (`Mutation::Commit`) or left as stored (`Mutation::Skip`).
    pub async fn mutate<T, R, F>(&self, key: &'static str, f: F) -> DomainResult<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> Mutation<R>,
    {
        let _guard = self.guard(key).await;
        let mut items = self.load::<T>(key).await;
        match f(&mut items) {
            Mutation::Commit(out) => {
                self.save(key, &items).await?;
                Ok(out)
            }
            Mutation::Skip(out) => Ok(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde::{Deserialize, Serialize};

    use super::super::InMemoryMedium;
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        body: String,
    }

    fn store_with_medium() -> (RecordStore, Arc<InMemoryMedium>) {
        let medium = Arc::new(InMemoryMedium::new());
        (RecordStore::new(medium.clone()), medium)
    }

    #[tokio::test]
    async fn test_load_missing_key_is_empty() {
        let (store, _) = store_with_medium();
        let notes: Vec<Note> = store.load(keys::CUSTOMERS).await;
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let (store, _) = store_with_medium();
        let notes = vec![Note {
            id: "1".to_string(),
            body: "hello".to_string(),
        }];
        store.save(keys::CUSTOMERS, &notes).await.unwrap();

        let loaded: Vec<Note> = store.load(keys::CUSTOMERS).await;
        assert_eq!(loaded, notes);
    }

    #[tokio::test]
    async fn test_malformed_json_is_treated_as_empty() {
        let (store, medium) = store_with_medium();
        medium
            .set(keys::PRODUCTS, "{not json".to_string())
            .await
            .unwrap();

        let loaded: Vec<Note> = store.load(keys::PRODUCTS).await;
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_mutate_skip_leaves_stored_value() {
        let (store, medium) = store_with_medium();
        store
            .save(
                keys::DEVICES,
                &[Note {
                    id: "1".to_string(),
                    body: "keep".to_string(),
                }],
            )
            .await
            .unwrap();

        let out = store
            .mutate::<Note, _, _>(keys::DEVICES, |items| {
                items.clear();
                Mutation::Skip("untouched")
            })
            .await
            .unwrap();
        assert_eq!(out, "untouched");

        // Skip must not persist the cleared vector
        let raw = medium.get(keys::DEVICES).await.unwrap().unwrap();
        assert!(raw.contains("keep"));
    }

    #[tokio::test]
    async fn test_concurrent_mutations_do_not_lose_appends() {
        let (store, _) = store_with_medium();
        let store = Arc::new(store);

        let push = |store: Arc<RecordStore>, id: &'static str| async move {
            store
                .mutate::<Note, _, _>(keys::SALES, |items| {
                    items.push(Note {
                        id: id.to_string(),
                        body: String::new(),
                    });
                    Mutation::Commit(())
                })
                .await
        };

        let (a, b) = tokio::join!(push(store.clone(), "a"), push(store.clone(), "b"));
        a.unwrap();
        b.unwrap();

        let loaded: Vec<Note> = store.load(keys::SALES).await;
        assert_eq!(loaded.len(), 2);
    }
}
