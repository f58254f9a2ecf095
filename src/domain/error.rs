//! Domain errors

use thiserror::Error;

use crate::domain::RepairStatus;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation: {0}")]
    Validation(String),

    #[error("Invalid repair status transition: {from} -> {to}")]
    InvalidTransition {
        from: RepairStatus,
        to: RepairStatus,
    },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
