//! Device service

use std::sync::Arc;

use log::info;
use validator::Validate;

use crate::domain::{Device, DomainError, DomainResult, NewDevice};
use crate::infrastructure::storage::{keys, Mutation, RecordStore};

/// Service for device records
pub struct DeviceService {
    store: Arc<RecordStore>,
}

impl DeviceService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Vec<Device> {
        self.store.load(keys::DEVICES).await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Device> {
        self.get_all().await.into_iter().find(|d| d.id == id)
    }

    pub async fn get_by_customer(&self, customer_id: &str) -> Vec<Device> {
        self.get_all()
            .await
            .into_iter()
            .filter(|d| d.customer_id == customer_id)
            .collect()
    }

    pub async fn create(&self, input: NewDevice) -> DomainResult<Device> {
        input
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let device = Device::new(input);
        let created = self
            .store
            .mutate::<Device, _, _>(keys::DEVICES, |devices| {
                devices.push(device.clone());
                Mutation::Commit(device)
            })
            .await?;

        info!(
            "Registered device {} ({} {})",
            created.id, created.brand, created.model
        );
        Ok(created)
    }
}
