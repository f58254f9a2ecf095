//! Storage medium traits and implementations

mod memory;
mod store;
mod traits;

pub use memory::InMemoryMedium;
pub use store::{keys, Mutation, RecordStore};
pub use traits::StorageMedium;
