/// Represents a past customer order as published in the orders JSON.
///
/// Orders are read-only here: they are listed and detailed, never created.
use crate::model::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInOrder {
    #[serde(rename = "ProductId")]
    pub product_id: ProductId,
    #[serde(rename = "Quantity", default)]
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "OrderId")]
    pub id: OrderId,
    #[serde(rename = "OrderDate", default)]
    pub date: String,
    #[serde(rename = "UserId", default)]
    pub user_id: UserId,
    #[serde(rename = "Products", default)]
    pub products: Vec<ProductInOrder>,
    #[serde(rename = "PaymentType", default)]
    pub payment_type: String,
}

impl Order {
    /// Quantity of `product_id` in this order, 0 when the order does not contain it.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.products
            .iter()
            .find(|line| line.product_id == product_id)
            .map_or(0, |line| line.quantity)
    }
}
