use serde::{Deserialize, Serialize};

use stocktrack_core::ProductId;

/// One inventory record.
///
/// Field names on disk follow the existing `inventario.json` layout
/// (`nombre`, `precio`); the English names are accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "precio", alias = "price")]
    pub price: f64,
    pub stock: i64,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
        }
    }

    /// Case-insensitive name comparison used for the uniqueness invariant.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
