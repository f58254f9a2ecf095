//! Customer service

use std::sync::Arc;

use log::info;
use validator::Validate;

use crate::domain::{Customer, CustomerUpdate, DomainError, DomainResult, NewCustomer};
use crate::infrastructure::storage::{keys, Mutation, RecordStore};

/// Service for customer records
pub struct CustomerService {
    store: Arc<RecordStore>,
}

impl CustomerService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Vec<Customer> {
        self.store.load(keys::CUSTOMERS).await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Customer> {
        self.get_all().await.into_iter().find(|c| c.id == id)
    }

    pub async fn create(&self, input: NewCustomer) -> DomainResult<Customer> {
        input
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let customer = Customer::new(input);
        let created = self
            .store
            .mutate::<Customer, _, _>(keys::CUSTOMERS, |customers| {
                customers.push(customer.clone());
                Mutation::Commit(customer)
            })
            .await?;

        info!("Created customer {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Shallow-merge `patch` into the stored record. Returns `Ok(None)` when
    /// the id is unknown; the collection is left untouched in that case.
    pub async fn update(
        &self,
        id: &str,
        patch: CustomerUpdate,
    ) -> DomainResult<Option<Customer>> {
        self.store
            .mutate::<Customer, _, _>(keys::CUSTOMERS, |customers| {
                match customers.iter_mut().find(|c| c.id == id) {
                    Some(customer) => {
                        customer.apply(patch);
                        Mutation::Commit(Some(customer.clone()))
                    }
                    None => Mutation::Skip(None),
                }
            })
            .await
    }

    /// Returns true when a record was removed.
    pub async fn delete(&self, id: &str) -> DomainResult<bool> {
        let deleted = self
            .store
            .mutate::<Customer, _, _>(keys::CUSTOMERS, |customers| {
                let before = customers.len();
                customers.retain(|c| c.id != id);
                if customers.len() < before {
                    Mutation::Commit(true)
                } else {
                    Mutation::Skip(false)
                }
            })
            .await?;

        if deleted {
            info!("Deleted customer {}", id);
        }
        Ok(deleted)
    }
}
