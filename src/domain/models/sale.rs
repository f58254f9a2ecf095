//! Sale domain entity and cart types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::new_record_id;
use super::product::Product;

/// Payment method for a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Mobile,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Card => write!(f, "card"),
            Self::Mobile => write!(f, "mobile"),
        }
    }
}

/// One cart line: a product snapshot plus a quantity.
///
/// The product is copied at sale time, not referenced, so later catalog
/// edits do not rewrite sale history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Computed money breakdown for a cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Compute subtotal, tax and total for a set of cart lines.
/// All amounts are rounded to 2 decimal places.
pub fn sale_totals(items: &[CartItem], tax_rate: Decimal) -> SaleTotals {
    let subtotal: Decimal = items.iter().map(CartItem::line_total).sum();
    let subtotal = subtotal.round_dp(2);
    let tax = (subtotal * tax_rate).round_dp(2);
    SaleTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Completed sale. Append-only: never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub customer_id: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    pub fn new(draft: NewSale, totals: SaleTotals) -> Self {
        Self {
            id: new_record_id(),
            items: draft.items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            payment_method: draft.payment_method,
            customer_id: draft.customer_id,
            created_by: draft.created_by,
            created_at: Utc::now(),
        }
    }
}

/// Checkout payload: the in-memory cart plus payment details
#[derive(Debug, Clone, Deserialize)]
pub struct NewSale {
    pub items: Vec<CartItem>,
    pub payment_method: PaymentMethod,
    pub customer_id: Option<String>,
    pub created_by: String,
}
