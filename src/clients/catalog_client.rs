use crate::catalog::{Catalog, CatalogSource};
use crate::model::{Customer, Order, OrderId, Product};
use crate::orders::{self, OrderDetail, OrderSummary, OrderedProduct};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Client for the read-only catalog.
///
/// Fetch failures never reach the caller: they are logged and reported as empty results, so a
/// page renders with no data instead of failing.
#[derive(Clone)]
pub struct CatalogClient {
    source: Arc<dyn CatalogSource>,
}

impl CatalogClient {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    #[instrument(skip(self))]
    pub async fn products(&self) -> Vec<Product> {
        match self.source.fetch_products().await {
            Ok(products) => {
                info!(count = products.len(), "Products loaded");
                products
            }
            Err(e) => {
                warn!(error = %e, "Failed to load products");
                Vec::new()
            }
        }
    }

    /// The product listing, ready for local stock edits.
    pub async fn catalog(&self) -> Catalog {
        Catalog::new(self.products().await)
    }

    #[instrument(skip(self))]
    pub async fn orders(&self) -> Vec<Order> {
        match self.source.fetch_orders().await {
            Ok(orders) => orders,
            Err(e) => {
                warn!(error = %e, "Failed to load orders");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn customers(&self) -> Vec<Customer> {
        match self.source.fetch_customers().await {
            Ok(customers) => customers,
            Err(e) => {
                warn!(error = %e, "Failed to load customers");
                Vec::new()
            }
        }
    }

    pub async fn order(&self, id: OrderId) -> Option<Order> {
        self.orders().await.into_iter().find(|order| order.id == id)
    }

    /// Catalog products of an order, each with its ordered quantity.
    pub async fn products_in_order(&self, id: OrderId) -> Vec<OrderedProduct> {
        let Some(order) = self.order(id).await else {
            return Vec::new();
        };
        orders::products_in_order(&order, &self.products().await)
    }

    pub async fn customer_for_order(&self, id: OrderId) -> Option<Customer> {
        let order = self.order(id).await?;
        self.customers()
            .await
            .into_iter()
            .find(|customer| customer.id == order.user_id)
    }

    #[instrument(skip(self))]
    pub async fn order_detail(&self, id: OrderId) -> Option<OrderDetail> {
        let order = self.order(id).await?;
        let (products, customers) = tokio::join!(self.products(), self.customers());
        Some(OrderDetail::new(order, &products, &customers))
    }

    #[instrument(skip(self))]
    pub async fn order_summaries(&self) -> Vec<OrderSummary> {
        let (orders, products, customers) =
            tokio::join!(self.orders(), self.products(), self.customers());
        orders::summarize(&orders, &products, &customers)
    }
}
