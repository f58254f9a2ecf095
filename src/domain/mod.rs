pub mod error;
pub mod models;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use models::customer::{Customer, CustomerUpdate, NewCustomer};
pub use models::device::{Device, NewDevice};
pub use models::product::{NewProduct, Product, ProductUpdate};
pub use models::repair::{NewRepairJob, RepairJob, RepairJobUpdate, RepairStatus};
pub use models::sale::{sale_totals, CartItem, NewSale, PaymentMethod, Sale, SaleTotals};
