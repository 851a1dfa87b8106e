//! Read-only catalog data: products, past orders and customers.
//!
//! A [`CatalogSource`] fetches the three JSON documents the storefront is built on. Sources
//! report failures as [`CatalogError`]; the [`CatalogClient`](crate::clients::CatalogClient)
//! in front of them turns those into empty results so a broken feed never takes the
//! storefront down.

mod file;
mod http;

pub use file::FileCatalog;
pub use http::HttpCatalog;

use crate::model::{Customer, Order, Product, ProductId};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

pub const PRODUCTS_ASSET: &str = "products.json";
pub const ORDERS_ASSET: &str = "orders.json";
pub const CUSTOMERS_ASSET: &str = "users.json";

/// Errors raised while fetching catalog documents.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog document is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Somewhere the catalog documents can be fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    async fn fetch_orders(&self) -> Result<Vec<Order>, CatalogError>;

    async fn fetch_customers(&self) -> Result<Vec<Customer>, CatalogError>;
}

/// The product listing as shown on the catalog page.
///
/// Stock edits made here are local to the listing; they are never written back to the source
/// and never touch products already in the cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products with fewer than [`LOW_STOCK_THRESHOLD`](crate::model::LOW_STOCK_THRESHOLD)
    /// pieces left.
    pub fn low_stock(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.is_low_stock())
    }

    /// Sets the available pieces of a listed product.
    ///
    /// Negative quantities and unknown ids are ignored. Returns whether a product changed.
    pub fn edit_product_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        let Ok(quantity) = u32::try_from(quantity) else {
            debug!(%id, quantity, "Ignoring invalid stock quantity");
            return false;
        };
        match self.products.iter_mut().find(|product| product.id == id) {
            Some(product) => {
                product.available_pieces = quantity;
                true
            }
            None => false,
        }
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
