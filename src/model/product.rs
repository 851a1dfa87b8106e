/// Represents a product in the catalog.
///
/// Products arrive from the catalog JSON and are stored verbatim inside cart line items.
/// The cart never changes a product's stock; it only reads the id and the price.
use serde::{Deserialize, Deserializer, Serialize};

use std::fmt::Display;
use std::str::FromStr;

/// Below this many available pieces a product is flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Type-safe identifier for Products.
///
/// Always serialized as a JSON integer. Deserialization also accepts numeric strings
/// (`"12"`), which older catalog and cart records contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(id) => Ok(Self(id)),
            Raw::Text(text) => text.parse().map_err(|_| {
                serde::de::Error::custom(format!("invalid product id {text:?}"))
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ProductId")]
    pub id: ProductId,
    #[serde(rename = "ProductName", default)]
    pub name: String,
    #[serde(rename = "ProductPrice", default)]
    pub price: f64,
    #[serde(rename = "AvailablePieces", default)]
    pub available_pieces: u32,
    #[serde(rename = "ProductImg", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        rename = "ProductDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `available_pieces` - Available stock
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        available_pieces: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            available_pieces,
            image: None,
            description: None,
            category: None,
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.available_pieces < LOW_STOCK_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_accepts_number_or_numeric_string() {
        let from_number: ProductId = serde_json::from_str("7").unwrap();
        let from_text: ProductId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_number, ProductId(7));
        assert_eq!(from_text, ProductId(7));
        assert!(serde_json::from_str::<ProductId>("\"seven\"").is_err());
        assert_eq!(serde_json::to_string(&ProductId(7)).unwrap(), "7");
    }

    #[test]
    fn test_product_tolerates_missing_fields() {
        let product: Product =
            serde_json::from_str(r#"{"ProductId": "3", "ProductPrice": 9.5}"#).unwrap();
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.price, 9.5);
        assert_eq!(product.name, "");
        assert_eq!(product.available_pieces, 0);
        assert!(product.image.is_none());
    }

    #[test]
    fn test_low_stock_threshold() {
        assert!(Product::new(1, "Mug", 4.0, 4).is_low_stock());
        assert!(!Product::new(1, "Mug", 4.0, 5).is_low_stock());
    }
}
