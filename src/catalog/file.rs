use super::{CatalogError, CatalogSource, CUSTOMERS_ASSET, ORDERS_ASSET, PRODUCTS_ASSET};
use crate::model::{Customer, Order, Product};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads catalog documents from a local directory (the bundled `assets/json`).
#[derive(Debug, Clone)]
pub struct FileCatalog {
    dir: PathBuf,
}

impl FileCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read<T: DeserializeOwned>(&self, asset: &str) -> Result<Vec<T>, CatalogError> {
        let path = self.dir.join(asset);
        debug!(path = %path.display(), "Reading catalog document");
        let raw = tokio::fs::read(&path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.read(PRODUCTS_ASSET).await
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, CatalogError> {
        self.read(ORDERS_ASSET).await
    }

    async fn fetch_customers(&self) -> Result<Vec<Customer>, CatalogError> {
        self.read(CUSTOMERS_ASSET).await
    }
}
