//! Durable media behind `InventoryStore`.
//!
//! A storage holds one serialized document: the whole product list. Every
//! save rewrites it; there are no incremental updates.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use thiserror::Error;

use crate::product::Product;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("malformed inventory data in {location}: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Whole-document persistence for the product list.
pub trait ProductStorage: Send + Sync {
    /// Read the stored list. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Product>>, StorageError>;

    /// Replace the stored list with `products`.
    fn save(&self, products: &[Product]) -> Result<(), StorageError>;

    /// Human-readable location, used in log messages.
    fn location(&self) -> String;
}

impl<S> ProductStorage for Arc<S>
where
    S: ProductStorage + ?Sized,
{
    fn load(&self) -> Result<Option<Vec<Product>>, StorageError> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        (**self).save(products)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Encode the list as a 4-space indented JSON array.
///
/// serde_json keeps non-ASCII characters literal, so names like "Café"
/// stay readable in the file.
pub fn encode(products: &[Product]) -> Result<Vec<u8>, StorageError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    products.serialize(&mut ser).map_err(StorageError::Encode)?;
    Ok(buf)
}

fn decode(bytes: &[u8], location: &str) -> Result<Vec<Product>, StorageError> {
    serde_json::from_slice(bytes).map_err(|source| StorageError::Decode {
        location: location.to_string(),
        source,
    })
}

/// JSON file on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            location: self.location(),
            source,
        }
    }
}

impl ProductStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Product>>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        decode(&bytes, &self.location()).map(Some)
    }

    fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        let bytes = encode(products)?;
        fs::write(&self.path, bytes).map_err(|e| self.io_error(e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory document store for tests/dev.
///
/// Counts writes and can be switched into a mode where every save fails,
/// which is how the store's best-effort persistence is exercised.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    document: RwLock<Option<Vec<u8>>>,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryStorage {
    /// Empty storage: `load` reports nothing stored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with raw document bytes (possibly malformed).
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            document: RwLock::new(Some(contents.into())),
            ..Self::default()
        }
    }

    /// Storage whose writes always fail.
    pub fn failing() -> Self {
        let storage = Self::default();
        storage.set_fail_writes(true);
        storage
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current document as text, if anything has been stored.
    pub fn contents(&self) -> Option<String> {
        self.document
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl ProductStorage for InMemoryStorage {
    fn load(&self) -> Result<Option<Vec<Product>>, StorageError> {
        let guard = self.document.read().unwrap_or_else(PoisonError::into_inner);
        match guard.as_deref() {
            Some(bytes) => decode(bytes, &self.location()).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io {
                location: self.location(),
                source: io::Error::other("writes disabled"),
            });
        }
        let bytes = encode(products)?;
        *self.document.write().unwrap_or_else(PoisonError::into_inner) = Some(bytes);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("A1", "Widget", 9.99, 10),
            Product::new("B2", "Café con leche", 2.5, 0),
        ]
    }

    #[test]
    fn encode_uses_four_space_indent_and_literal_unicode() {
        let text = String::from_utf8(encode(&sample()).unwrap()).unwrap();
        let expected = r#"[
    {
        "id": "A1",
        "nombre": "Widget",
        "precio": 9.99,
        "stock": 10
    },
    {
        "id": "B2",
        "nombre": "Café con leche",
        "precio": 2.5,
        "stock": 0
    }
]"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn file_storage_reports_missing_file_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("inventario.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn file_storage_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("inventario.json"));
        storage.save(&sample()).unwrap();
        assert_eq!(storage.load().unwrap(), Some(sample()));
    }

    #[test]
    fn file_storage_rejects_malformed_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventario.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStorage::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Decode { .. }));
    }

    #[test]
    fn file_storage_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("missing").join("inventario.json"));
        let err = storage.save(&sample()).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }

    #[test]
    fn in_memory_storage_counts_saves_and_can_fail() {
        let storage = InMemoryStorage::new();
        storage.save(&sample()).unwrap();
        assert_eq!(storage.save_count(), 1);

        storage.set_fail_writes(true);
        assert!(storage.save(&[]).is_err());
        assert_eq!(storage.save_count(), 1);
        assert_eq!(storage.load().unwrap(), Some(sample()));
    }
}
