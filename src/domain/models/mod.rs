//! Domain entities

pub mod customer;
pub mod device;
pub mod product;
pub mod repair;
pub mod sale;

use uuid::Uuid;

/// Generate a collection-unique record id.
///
/// Random UUIDs rather than wall-clock derived ids, so rapid successive
/// creates cannot collide.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
