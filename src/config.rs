//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_CATALOG_URL` - Base URL serving `products.json`, `orders.json`, `users.json`
//! - `STOREFRONT_CATALOG_DIR` - Local directory with the same files (default: assets/json),
//!   used when no URL is set
//! - `STOREFRONT_CART_DIR` - Directory for the persisted cart (default: keep it in memory)
//! - `STOREFRONT_CART_KEY` - Storage key of the cart record (default: cart_items)
//! - `STOREFRONT_CHANNEL_SIZE` - Cart actor mailbox capacity (default: 32)

use std::path::PathBuf;

use thiserror::Error;

use crate::cart_actor::CART_KEY;

const DEFAULT_CATALOG_DIR: &str = "assets/json";
const DEFAULT_CHANNEL_SIZE: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where catalog documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    Http(String),
    Dir(PathBuf),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub catalog: CatalogLocation,
    /// `None` keeps the cart in memory only.
    pub cart_dir: Option<PathBuf>,
    pub cart_key: String,
    pub channel_size: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogLocation::Dir(PathBuf::from(DEFAULT_CATALOG_DIR)),
            cart_dir: None,
            cart_key: CART_KEY.to_string(),
            channel_size: DEFAULT_CHANNEL_SIZE,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let catalog = match get("STOREFRONT_CATALOG_URL") {
            Some(url) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidEnvVar(
                        "STOREFRONT_CATALOG_URL".to_string(),
                        "must start with http:// or https://".to_string(),
                    ));
                }
                CatalogLocation::Http(url)
            }
            None => CatalogLocation::Dir(PathBuf::from(
                get("STOREFRONT_CATALOG_DIR").unwrap_or_else(|| DEFAULT_CATALOG_DIR.to_string()),
            )),
        };

        let channel_size = match get("STOREFRONT_CHANNEL_SIZE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidEnvVar(
                        "STOREFRONT_CHANNEL_SIZE".to_string(),
                        format!("expected a positive integer, got {raw:?}"),
                    ))
                }
            },
            None => DEFAULT_CHANNEL_SIZE,
        };

        Ok(Self {
            catalog,
            cart_dir: get("STOREFRONT_CART_DIR").map(PathBuf::from),
            cart_key: get("STOREFRONT_CART_KEY").unwrap_or_else(|| CART_KEY.to_string()),
            channel_size,
        })
    }
}
