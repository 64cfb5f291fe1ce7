use std::collections::HashSet;
use std::path::Path;

use stocktrack_core::{InventoryError, InventoryResult, ProductId};

use crate::product::Product;
use crate::storage::{JsonFileStorage, ProductStorage};

/// Ordered, validated product list mirrored to a `ProductStorage`.
///
/// Every mutating method validates first, mutates second and persists last,
/// so a failed call leaves both memory and storage untouched. The store does
/// no locking of its own; callers sharing it across threads must serialize
/// access (the API wraps it in a mutex).
#[derive(Debug)]
pub struct InventoryStore<S = JsonFileStorage> {
    storage: S,
    products: Vec<Product>,
}

impl InventoryStore<JsonFileStorage> {
    /// Open the JSON file at `path`, starting empty if it is missing or unreadable.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_storage(JsonFileStorage::new(path))
    }
}

impl<S: ProductStorage> InventoryStore<S> {
    pub fn with_storage(storage: S) -> Self {
        let products = load(&storage);
        Self { storage, products }
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a new product and persist.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// duplicate id, duplicate name (case-insensitive), blank name, negative
    /// (or non-finite) price, negative stock.
    pub fn add_product(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> InventoryResult<&Product> {
        let id = id.into();
        let name = name.into();

        if self.product(id.as_str()).is_some() {
            return Err(InventoryError::DuplicateId(id));
        }
        if self.products.iter().any(|p| p.has_name(&name)) {
            return Err(InventoryError::DuplicateName(name));
        }
        if name.trim().is_empty() {
            return Err(InventoryError::InvalidName);
        }
        // NaN would be written as `null` and make the file unreadable.
        if !price.is_finite() || price < 0.0 {
            return Err(InventoryError::InvalidPrice(price));
        }
        if stock < 0 {
            return Err(InventoryError::InvalidStock(stock));
        }

        tracing::info!(product_id = %id, name = %name, price, stock, "product added");
        self.products.push(Product {
            id,
            name,
            price,
            stock,
        });
        self.save();

        let idx = self.products.len() - 1;
        Ok(&self.products[idx])
    }

    /// Remove the product with `id`, if any, and persist.
    ///
    /// Deleting an unknown id is not an error; storage is still rewritten.
    pub fn delete_product(&mut self, id: &str) {
        let before = self.products.len();
        self.products.retain(|p| p.id.as_str() != id);
        let removed = before - self.products.len();

        if removed > 0 {
            tracing::info!(product_id = id, "product deleted");
        } else {
            tracing::debug!(product_id = id, "delete of unknown product");
        }
        self.save();
    }

    /// Overwrite the stock count of `id` and persist.
    ///
    /// The new value is not range-checked: negative counts are accepted here
    /// even though `add_product` rejects them.
    pub fn update_stock(&mut self, id: &str, new_stock: i64) -> InventoryResult<&Product> {
        let Some(idx) = self.products.iter().position(|p| p.id.as_str() == id) else {
            return Err(InventoryError::ProductNotFound(ProductId::new(id)));
        };

        let previous = self.products[idx].stock;
        self.products[idx].stock = new_stock;
        tracing::info!(product_id = id, previous, stock = new_stock, "stock updated");
        self.save();

        Ok(&self.products[idx])
    }

    /// Best-effort flush: failures are logged and memory stays authoritative.
    fn save(&self) {
        if let Err(e) = self.storage.save(&self.products) {
            tracing::error!(
                location = %self.storage.location(),
                error = %e,
                "failed to save inventory; change kept in memory only"
            );
        }
    }
}

fn load<S: ProductStorage>(storage: &S) -> Vec<Product> {
    match storage.load() {
        Ok(Some(products)) => {
            warn_on_duplicates(&products, &storage.location());
            tracing::info!(
                location = %storage.location(),
                count = products.len(),
                "inventory loaded"
            );
            products
        }
        Ok(None) => {
            tracing::warn!(
                location = %storage.location(),
                "inventory file not found; starting with an empty inventory"
            );
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(
                location = %storage.location(),
                error = %e,
                "inventory file damaged or unreadable; starting with an empty inventory"
            );
            Vec::new()
        }
    }
}

/// Stored data is kept as-is even if it breaks uniqueness; flag it so the
/// file can be fixed by hand.
fn warn_on_duplicates(products: &[Product], location: &str) {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for p in products {
        if !ids.insert(p.id.as_str()) {
            tracing::warn!(location, product_id = %p.id, "duplicate product id in stored inventory");
        }
        if !names.insert(p.name.to_lowercase()) {
            tracing::warn!(location, name = %p.name, "duplicate product name in stored inventory");
        }
    }
}
