//! The storefront's page routes.

use crate::model::OrderId;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// The catalog page; also where the empty path redirects.
    #[default]
    Products,
    Cart,
    Checkout,
    Orders,
    OrderDetails(OrderId),
}

impl Route {
    /// Resolves a URL path. Returns `None` for paths no page handles.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.trim().trim_matches('/');
        let mut segments = path.split('/');
        let route = match (segments.next(), segments.next()) {
            (Some(""), None) | (Some("products"), None) => Self::Products,
            (Some("cart"), None) => Self::Cart,
            (Some("checkout"), None) => Self::Checkout,
            (Some("orders"), None) => Self::Orders,
            (Some("order-details"), Some(id)) => Self::OrderDetails(id.parse().ok()?),
            _ => return None,
        };
        if segments.next().is_some() {
            return None;
        }
        Some(route)
    }

    /// Whether the route appears in the site navigation. The order pages exist but are
    /// reachable only by URL.
    pub fn is_navigable(&self) -> bool {
        matches!(self, Self::Products | Self::Cart | Self::Checkout)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Products => "/products".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::Checkout => "/checkout".to_string(),
            Self::Orders => "/orders".to_string(),
            Self::OrderDetails(id) => format!("/order-details/{}", id.0),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
