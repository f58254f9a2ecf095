//! Product domain entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::new_record_id;

/// Inventory product
///
/// `sku` is business-unique by convention; the store does not enforce
/// uniqueness. `stock` may go negative (backorder model) since sale
/// decrements are never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    pub category: String,
    pub price: Decimal,
    pub cost: Option<Decimal>,
    pub stock: i32,
    pub min_stock: i32,
}

impl Product {
    pub fn new(input: NewProduct) -> Self {
        Self {
            id: new_record_id(),
            name: input.name,
            description: input.description,
            sku: input.sku,
            category: input.category,
            price: input.price,
            cost: input.cost,
            stock: input.stock,
            min_stock: input.min_stock,
        }
    }

    /// Shallow merge: provided fields overwrite, omitted fields are retained.
    pub fn apply(&mut self, patch: ProductUpdate) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(sku) = patch.sku {
            self.sku = sku;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(cost) = patch.cost {
            self.cost = Some(cost);
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(min_stock) = patch.min_stock {
            self.min_stock = min_stock;
        }
    }

    /// At or below the configured minimum threshold (inclusive boundary,
    /// so `min_stock = 0, stock = 0` counts).
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

/// Payload for creating a product
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "sku must not be empty"))]
    pub sku: String,
    pub category: String,
    pub price: Decimal,
    pub cost: Option<Decimal>,
    pub stock: i32,
    #[validate(range(min = 0, message = "min_stock must not be negative"))]
    pub min_stock: i32,
}

/// Partial update for a product
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub stock: Option<i32>,
    pub min_stock: Option<i32>,
}
