//! Customer domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::new_record_id;

/// Customer record
///
/// Referenced by id from devices and repair jobs; the store does not
/// enforce that reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(input: NewCustomer) -> Self {
        Self {
            id: new_record_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            created_at: Utc::now(),
        }
    }

    /// Shallow merge: provided fields overwrite, omitted fields are retained.
    pub fn apply(&mut self, patch: CustomerUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
    }
}

/// Payload for creating a customer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

/// Partial update for a customer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
