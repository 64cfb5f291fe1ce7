//! `stocktrack-core` — shared inventory building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP).

pub mod error;
pub mod id;

pub use error::{InventoryError, InventoryResult};
pub use id::ProductId;
