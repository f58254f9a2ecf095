//! Collection entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One persisted collection: a JSON-array text blob under a fixed key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "collections")]
pub struct Model {
    /// Collection key, e.g. "customers" or "sales"
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,

    /// The serialized JSON array
    #[sea_orm(column_type = "Text")]
    pub value: String,

    /// When the collection was last written
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
