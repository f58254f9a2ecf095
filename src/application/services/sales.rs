//! Sales service: checkout, daily totals, date-range reporting

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use log::{info, warn};
use rust_decimal::Decimal;

use crate::domain::{sale_totals, DomainError, DomainResult, NewSale, Product, Sale};
use crate::infrastructure::storage::{keys, RecordStore};

/// Default tax rate applied at checkout (10%)
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Service for recording sales and reporting on them
pub struct SalesService {
    store: Arc<RecordStore>,
    tax_rate: Decimal,
}

impl SalesService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self::with_tax_rate(store, DEFAULT_TAX_RATE)
    }

    pub fn with_tax_rate(store: Arc<RecordStore>, tax_rate: Decimal) -> Self {
        Self { store, tax_rate }
    }

    pub async fn get_all(&self) -> Vec<Sale> {
        self.store.load(keys::SALES).await
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Sale> {
        self.get_all().await.into_iter().find(|s| s.id == id)
    }

    /// Record a sale and decrement stock for every cart line.
    ///
    /// The sale append and all stock decrements are written through one
    /// atomic batch, so an interruption can never leave a recorded sale
    /// whose stock adjustments were lost. Cart lines referencing products
    /// no longer in the catalog are logged and skipped for the stock
    /// adjustment; the sale line itself is kept (it carries a snapshot).
    pub async fn create(&self, draft: NewSale) -> DomainResult<Sale> {
        if draft.items.is_empty() {
            return Err(DomainError::Validation("cart is empty".to_string()));
        }
        if draft.items.iter().any(|item| item.quantity == 0) {
            return Err(DomainError::Validation(
                "cart line quantity must be positive".to_string(),
            ));
        }
        if draft.items.iter().any(|item| item.quantity > i32::MAX as u32) {
            return Err(DomainError::Validation(
                "cart line quantity exceeds the supported maximum".to_string(),
            ));
        }

        let totals = sale_totals(&draft.items, self.tax_rate);
        let sale = Sale::new(draft, totals);

        // Guards in key name order: products before sales.
        let _products_guard = self.store.guard(keys::PRODUCTS).await;
        let _sales_guard = self.store.guard(keys::SALES).await;

        let mut products: Vec<Product> = self.store.load(keys::PRODUCTS).await;
        for item in &sale.items {
            match products.iter_mut().find(|p| p.id == item.product.id) {
                Some(product) => product.stock = product.stock.saturating_sub(item.quantity as i32),
                None => warn!(
                    "Sold product {} is no longer in the catalog, stock not adjusted",
                    item.product.id
                ),
            }
        }

        let mut sales: Vec<Sale> = self.store.load(keys::SALES).await;
        sales.push(sale.clone());

        self.store
            .save_batch(vec![
                (keys::PRODUCTS, serde_json::to_string(&products)?),
                (keys::SALES, serde_json::to_string(&sales)?),
            ])
            .await?;

        info!(
            "Recorded sale {} ({} lines, total {})",
            sale.id,
            sale.items.len(),
            sale.total
        );
        Ok(sale)
    }

    /// Sum of totals for sales made today, local calendar day.
    /// Time of day is ignored.
    pub async fn get_today_total(&self) -> Decimal {
        let today = Local::now().date_naive();
        self.get_all()
            .await
            .iter()
            .filter(|s| s.created_at.with_timezone(&Local).date_naive() == today)
            .map(|s| s.total)
            .sum()
    }

    /// Sales whose creation timestamp falls in `[start, end]`, inclusive.
    pub async fn get_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<Sale> {
        self.get_all()
            .await
            .into_iter()
            .filter(|s| s.created_at >= start && s.created_at <= end)
            .collect()
    }
}
