//! Device domain entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::new_record_id;

/// A customer's device brought in for repair
///
/// `customer_id` is a weak reference; deleting the customer does not
/// cascade here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub customer_id: String,
    /// Device category, e.g. "phone" or "tablet"
    pub kind: String,
    pub brand: String,
    pub model: String,
    pub serial_number: Option<String>,
    pub imei: Option<String>,
}

impl Device {
    pub fn new(input: NewDevice) -> Self {
        Self {
            id: new_record_id(),
            customer_id: input.customer_id,
            kind: input.kind,
            brand: input.brand,
            model: input.model,
            serial_number: input.serial_number,
            imei: input.imei,
        }
    }
}

/// Payload for registering a device
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewDevice {
    #[validate(length(min = 1, message = "customer_id must not be empty"))]
    pub customer_id: String,
    #[validate(length(min = 1, message = "kind must not be empty"))]
    pub kind: String,
    pub brand: String,
    pub model: String,
    pub serial_number: Option<String>,
    pub imei: Option<String>,
}
