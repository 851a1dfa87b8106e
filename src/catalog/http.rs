use super::{CatalogError, CatalogSource, CUSTOMERS_ASSET, ORDERS_ASSET, PRODUCTS_ASSET};
use crate::model::{Customer, Order, Product};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Fetches catalog documents over HTTP, e.g. from `https://shop.example/assets/json`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn url_for(&self, asset: &str) -> String {
        format!("{}/{}", self.base_url, asset)
    }

    #[instrument(skip(self))]
    async fn fetch<T: DeserializeOwned>(&self, asset: &str) -> Result<Vec<T>, CatalogError> {
        let url = self.url_for(asset);
        debug!(%url, "Fetching catalog document");
        let items = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<T>>()
            .await?;
        Ok(items)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.fetch(PRODUCTS_ASSET).await
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, CatalogError> {
        self.fetch(ORDERS_ASSET).await
    }

    async fn fetch_customers(&self) -> Result<Vec<Customer>, CatalogError> {
        self.fetch(CUSTOMERS_ASSET).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let catalog = HttpCatalog::new("http://localhost:4200/assets/json/");
        assert_eq!(
            catalog.url_for(PRODUCTS_ASSET),
            "http://localhost:4200/assets/json/products.json"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let catalog = HttpCatalog::new("http://127.0.0.1:9");
        assert!(catalog.fetch_products().await.is_err());
    }
}
