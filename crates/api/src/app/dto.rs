use serde::Deserialize;
use thiserror::Error;

use stocktrack_inventory::Product;

// -------------------------
// Request DTOs
// -------------------------

/// Raw add-product form. Numeric fields arrive as text and are parsed by
/// `parse`, so empty and non-numeric input get their own messages.
#[derive(Debug, Default, Deserialize)]
pub struct AddProductForm {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "precio")]
    pub price: String,
    #[serde(default)]
    pub stock: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStockForm {
    #[serde(default)]
    pub stock: String,
}

/// Add-product input after caller-side parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Malformed form input, rejected before the store is called.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("price cannot be empty")]
    EmptyPrice,

    #[error("price must be a number (got '{0}')")]
    InvalidPrice(String),

    #[error("stock cannot be empty")]
    EmptyStock,

    #[error("stock must be an integer (got '{0}')")]
    InvalidStock(String),
}

impl AddProductForm {
    /// Trim text fields and parse price/stock. Price is checked first.
    pub fn parse(self) -> Result<NewProduct, InputError> {
        let price = self.price.trim();
        if price.is_empty() {
            return Err(InputError::EmptyPrice);
        }
        let price: f64 = price
            .parse()
            .map_err(|_| InputError::InvalidPrice(price.to_string()))?;

        let stock = self.stock.trim();
        if stock.is_empty() {
            return Err(InputError::EmptyStock);
        }
        let stock = parse_stock(stock)?;

        Ok(NewProduct {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            price,
            stock,
        })
    }
}

impl UpdateStockForm {
    pub fn parse(&self) -> Result<i64, InputError> {
        parse_stock(self.stock.trim())
    }
}

fn parse_stock(raw: &str) -> Result<i64, InputError> {
    raw.parse()
        .map_err(|_| InputError::InvalidStock(raw.to_string()))
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id.as_str(),
        "name": p.name,
        "price": p.price,
        "stock": p.stock,
    })
}

pub fn products_to_json(products: &[Product]) -> serde_json::Value {
    serde_json::json!({
        "count": products.len(),
        "products": products.iter().map(product_to_json).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(price: &str, stock: &str) -> AddProductForm {
        AddProductForm {
            id: " A1 ".to_string(),
            name: " Widget ".to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
        }
    }

    #[test]
    fn parses_and_trims() {
        let parsed = form(" 9.99 ", " 10 ").parse().unwrap();
        assert_eq!(
            parsed,
            NewProduct {
                id: "A1".to_string(),
                name: "Widget".to_string(),
                price: 9.99,
                stock: 10,
            }
        );
    }

    #[test]
    fn empty_numeric_fields_are_reported_in_order() {
        assert_eq!(form("", "").parse().unwrap_err(), InputError::EmptyPrice);
        assert_eq!(form("1", "  ").parse().unwrap_err(), InputError::EmptyStock);
    }

    #[test]
    fn non_numeric_fields_are_rejected() {
        assert_eq!(
            form("abc", "1").parse().unwrap_err(),
            InputError::InvalidPrice("abc".to_string())
        );
        assert_eq!(
            form("1", "2.5").parse().unwrap_err(),
            InputError::InvalidStock("2.5".to_string())
        );
    }

    #[test]
    fn negative_values_pass_through_to_the_store() {
        let parsed = form("-1", "-2").parse().unwrap();
        assert_eq!((parsed.price, parsed.stock), (-1.0, -2));
    }

    #[test]
    fn update_form_requires_an_integer() {
        let f = UpdateStockForm { stock: "".to_string() };
        assert_eq!(f.parse().unwrap_err(), InputError::InvalidStock(String::new()));
        let f = UpdateStockForm { stock: " 7 ".to_string() };
        assert_eq!(f.parse().unwrap(), 7);
    }
}
