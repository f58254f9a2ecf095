//! Database storage medium implementation using SeaORM

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionError, TransactionTrait,
};

use super::entities::collection;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::storage::StorageMedium;

/// Key/value medium backed by a single `collections` table
pub struct DatabaseMedium {
    db: DatabaseConnection,
}

impl DatabaseMedium {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn upsert(key: String, value: String) -> sea_orm::Insert<collection::ActiveModel> {
    let model = collection::ActiveModel {
        key: Set(key),
        value: Set(value),
        updated_at: Set(Utc::now()),
    };
    collection::Entity::insert(model).on_conflict(
        OnConflict::column(collection::Column::Key)
            .update_columns([collection::Column::Value, collection::Column::UpdatedAt])
            .to_owned(),
    )
}

#[async_trait]
impl StorageMedium for DatabaseMedium {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let row = collection::Entity::find_by_id(key.to_string())
            .one(&self.db)
            .await?;
        Ok(row.map(|m| m.value))
    }

    async fn set(&self, key: &str, value: String) -> DomainResult<()> {
        upsert(key.to_string(), value)
            .exec_without_returning(&self.db)
            .await?;
        debug!("Wrote collection '{}'", key);
        Ok(())
    }

    async fn set_many(&self, entries: Vec<(String, String)>) -> DomainResult<()> {
        let count = entries.len();
        self.db
            .transaction::<_, (), DbErr>(move |txn| {
                Box::pin(async move {
                    for (key, value) in entries {
                        upsert(key, value).exec_without_returning(txn).await?;
                    }
                    Ok(())
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(err) | TransactionError::Transaction(err) => {
                    DomainError::Database(err)
                }
            })?;
        debug!("Wrote {} collections in one transaction", count);
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        collection::Entity::delete_by_id(key.to_string())
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn remove_many(&self, keys: &[&str]) -> DomainResult<()> {
        collection::Entity::delete_many()
            .filter(collection::Column::Key.is_in(keys.iter().map(|k| k.to_string())))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::infrastructure::database::migrator::Migrator;

    async fn medium() -> DatabaseMedium {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        DatabaseMedium::new(db)
    }

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let medium = medium().await;
        assert_eq!(medium.get("products").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_upserts_over_existing_key() {
        let medium = medium().await;
        medium.set("products", "[]".to_string()).await.unwrap();
        medium
            .set("products", r#"[{"id":"p1"}]"#.to_string())
            .await
            .unwrap();

        assert_eq!(
            medium.get("products").await.unwrap(),
            Some(r#"[{"id":"p1"}]"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_set_many_writes_batch_with_mixed_insert_and_update() {
        let medium = medium().await;
        medium.set("products", "old".to_string()).await.unwrap();

        medium
            .set_many(vec![
                ("products".to_string(), "new".to_string()),
                ("sales".to_string(), "first".to_string()),
            ])
            .await
            .unwrap();

        assert_eq!(medium.get("products").await.unwrap(), Some("new".to_string()));
        assert_eq!(medium.get("sales").await.unwrap(), Some("first".to_string()));
    }

    #[tokio::test]
    async fn test_remove_and_remove_many() {
        let medium = medium().await;
        medium.set("customers", "[]".to_string()).await.unwrap();
        medium.set("devices", "[]".to_string()).await.unwrap();
        medium.set("repairs", "[]".to_string()).await.unwrap();

        medium.remove("customers").await.unwrap();
        assert_eq!(medium.get("customers").await.unwrap(), None);

        medium.remove_many(&["devices", "repairs"]).await.unwrap();
        assert_eq!(medium.get("devices").await.unwrap(), None);
        assert_eq!(medium.get("repairs").await.unwrap(), None);
    }
}
