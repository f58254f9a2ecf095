//! Entity service facades over the record store

mod customers;
mod devices;
mod products;
mod repairs;
mod sales;
mod seed;

pub use customers::CustomerService;
pub use devices::DeviceService;
pub use products::ProductService;
pub use repairs::RepairService;
pub use sales::{SalesService, DEFAULT_TAX_RATE};
pub use seed::seed_sample_products;
