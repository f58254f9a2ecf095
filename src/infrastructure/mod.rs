//! Infrastructure layer - external concerns

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig, DatabaseMedium};
pub use storage::{keys, InMemoryMedium, Mutation, RecordStore, StorageMedium};
