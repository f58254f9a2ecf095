//! # Repair-Shop POS Local Record Store
//!
//! Local persistence and service layer for a repair-shop point-of-sale
//! system: customers, devices, repair jobs, a product catalog with stock
//! tracking, and append-only sale records.
//!
//! ## Architecture
//!
//! - **domain**: Core business entities, errors and money math
//! - **application**: Entity service facades over the generic record store
//! - **infrastructure**: Storage medium trait, in-memory and SQLite-backed
//!   implementations, and the record store itself
//!
//! Collections are persisted as JSON-array text under a fixed key per
//! entity type. The store serializes mutations per collection and writes
//! sale checkout (sale append plus stock decrements) as one atomic batch.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, DatabaseMedium};

// Re-export the store and services
pub use application::services::{
    seed_sample_products, CustomerService, DeviceService, ProductService, RepairService,
    SalesService,
};
pub use infrastructure::storage::{InMemoryMedium, RecordStore, StorageMedium};
