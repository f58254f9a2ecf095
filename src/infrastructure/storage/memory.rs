//! In-memory storage medium implementation

use async_trait::async_trait;
use dashmap::DashMap;

use super::StorageMedium;
use crate::domain::DomainResult;

/// In-memory medium for development and testing
///
/// `set_many` is only atomic with respect to readers of a single key;
/// real batch atomicity comes from the database medium. The record store
/// serializes mutations per collection, which is enough for tests.
#[derive(Default)]
pub struct InMemoryMedium {
    entries: DashMap<String, String>,
}

impl InMemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageMedium for InMemoryMedium {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    async fn set(&self, key: &str, value: String) -> DomainResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn set_many(&self, entries: Vec<(String, String)>) -> DomainResult<()> {
        for (key, value) in entries {
            self.entries.insert(key, value);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn remove_many(&self, keys: &[&str]) -> DomainResult<()> {
        for key in keys {
            self.entries.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let medium = InMemoryMedium::new();
        assert_eq!(medium.get("customers").await.unwrap(), None);

        medium.set("customers", "[]".to_string()).await.unwrap();
        assert_eq!(
            medium.get("customers").await.unwrap(),
            Some("[]".to_string())
        );

        medium.remove("customers").await.unwrap();
        assert_eq!(medium.get("customers").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_many_and_remove_many() {
        let medium = InMemoryMedium::new();
        medium
            .set_many(vec![
                ("products".to_string(), "[1]".to_string()),
                ("sales".to_string(), "[2]".to_string()),
            ])
            .await
            .unwrap();

        assert_eq!(medium.get("products").await.unwrap(), Some("[1]".to_string()));
        assert_eq!(medium.get("sales").await.unwrap(), Some("[2]".to_string()));

        medium.remove_many(&["products", "sales"]).await.unwrap();
        assert_eq!(medium.get("products").await.unwrap(), None);
        assert_eq!(medium.get("sales").await.unwrap(), None);
    }
}
