//! Product and inventory service

use std::sync::Arc;

use log::{info, warn};
use validator::Validate;

use crate::domain::{DomainError, DomainResult, NewProduct, Product, ProductUpdate};
use crate::infrastructure::storage::{keys, Mutation, RecordStore};

/// Service for the product catalog and stock levels
pub struct ProductService {
    store: Arc<RecordStore>,
}

impl ProductService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Vec<Product> {
        self.store.load(keys::PRODUCTS).await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Product> {
        self.get_all().await.into_iter().find(|p| p.id == id)
    }

    /// Products at or below their minimum stock threshold.
    pub async fn get_low_stock(&self) -> Vec<Product> {
        self.get_all()
            .await
            .into_iter()
            .filter(Product::is_low_stock)
            .collect()
    }

    pub async fn create(&self, input: NewProduct) -> DomainResult<Product> {
        input
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let product = Product::new(input);
        let created = self
            .store
            .mutate::<Product, _, _>(keys::PRODUCTS, |products| {
                products.push(product.clone());
                Mutation::Commit(product)
            })
            .await?;

        info!("Created product {} ({})", created.id, created.sku);
        Ok(created)
    }

    /// Shallow-merge `patch` into the stored record. Returns `Ok(None)` when
    /// the id is unknown; the collection is left untouched in that case.
    pub async fn update(&self, id: &str, patch: ProductUpdate) -> DomainResult<Option<Product>> {
        self.store
            .mutate::<Product, _, _>(keys::PRODUCTS, |products| {
                match products.iter_mut().find(|p| p.id == id) {
                    Some(product) => {
                        product.apply(patch);
                        Mutation::Commit(Some(product.clone()))
                    }
                    None => Mutation::Skip(None),
                }
            })
            .await
    }

    /// Add `delta` (may be negative) to the current stock count.
    ///
    /// Stock is deliberately not clamped at zero: oversold items go negative
    /// and surface through [`get_low_stock`](Self::get_low_stock).
    pub async fn update_stock(&self, id: &str, delta: i32) -> DomainResult<Option<Product>> {
        let updated = self
            .store
            .mutate::<Product, _, _>(keys::PRODUCTS, |products| {
                match products.iter_mut().find(|p| p.id == id) {
                    Some(product) => {
                        product.stock += delta;
                        Mutation::Commit(Some(product.clone()))
                    }
                    None => Mutation::Skip(None),
                }
            })
            .await?;

        if let Some(product) = &updated {
            if product.stock < 0 {
                warn!(
                    "Product {} stock is negative ({}) after delta {}",
                    product.id, product.stock, delta
                );
            }
        }
        Ok(updated)
    }

    /// Returns true when a record was removed.
    pub async fn delete(&self, id: &str) -> DomainResult<bool> {
        let deleted = self
            .store
            .mutate::<Product, _, _>(keys::PRODUCTS, |products| {
                let before = products.len();
                products.retain(|p| p.id != id);
                if products.len() < before {
                    Mutation::Commit(true)
                } else {
                    Mutation::Skip(false)
                }
            })
            .await?;

        if deleted {
            info!("Deleted product {}", id);
        }
        Ok(deleted)
    }
}
