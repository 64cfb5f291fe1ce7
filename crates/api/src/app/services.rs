use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use stocktrack_inventory::InventoryStore;

use crate::config::ApiConfig;

/// The process-wide store, serialized behind a mutex.
///
/// `InventoryStore` has no locking of its own; every handler goes through
/// this lock so only one request touches the store at a time.
pub type SharedInventory = Arc<Mutex<InventoryStore>>;

pub fn build_inventory(config: &ApiConfig) -> SharedInventory {
    share(InventoryStore::open(&config.inventory_file))
}

pub fn share(store: InventoryStore) -> SharedInventory {
    Arc::new(Mutex::new(store))
}

/// Lock the store, recovering from a poisoned mutex.
///
/// Store methods validate before mutating, so a panic mid-request cannot
/// leave a half-applied change behind.
pub fn lock(inventory: &SharedInventory) -> MutexGuard<'_, InventoryStore> {
    inventory.lock().unwrap_or_else(PoisonError::into_inner)
}
