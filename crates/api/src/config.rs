//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_INVENTORY_FILE: &str = "inventario.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BIND_ADDR '{value}' is not a socket address: {reason}")]
    InvalidBindAddr { value: String, reason: String },

    #[error("INVENTORY_FILE cannot be empty")]
    EmptyInventoryFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP server listens on (`BIND_ADDR`).
    pub bind_addr: SocketAddr,
    /// JSON file backing the inventory (`INVENTORY_FILE`).
    pub inventory_file: PathBuf,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                reason: e.to_string(),
            })?;

        let inventory_file =
            lookup("INVENTORY_FILE").unwrap_or_else(|| DEFAULT_INVENTORY_FILE.to_string());
        if inventory_file.trim().is_empty() {
            return Err(ConfigError::EmptyInventoryFile);
        }

        Ok(Self {
            bind_addr,
            inventory_file: PathBuf::from(inventory_file),
        })
    }
}
