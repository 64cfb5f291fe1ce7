//! Inventory domain module (file-backed).
//!
//! `InventoryStore` owns the ordered product list, validates every mutation
//! and rewrites its `ProductStorage` after each successful change.

pub mod product;
pub mod storage;
pub mod store;

pub use product::Product;
pub use storage::{InMemoryStorage, JsonFileStorage, ProductStorage, StorageError};
pub use store::InventoryStore;
