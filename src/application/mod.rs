//! Application layer - business logic over the record store

pub mod services;

pub use services::{
    seed_sample_products, CustomerService, DeviceService, ProductService, RepairService,
    SalesService,
};
