/// Cart line items and snapshots.
///
/// A [`CartSnapshot`] is both what observers receive and what is written to storage, as a JSON
/// array of `{ "product": …, "quantity": … }` records in cart order.
use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product plus how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// The ordered line items of a cart at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot(Vec<LineItem>);

impl CartSnapshot {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.0.iter().find(|item| item.product.id == id)
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |item| item.quantity)
    }

    /// Sum of all line item quantities (the navbar badge number), capped at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.0
            .iter()
            .map(|item| item.quantity)
            .fold(0u32, u32::saturating_add)
    }

    pub fn total_price(&self) -> f64 {
        self.0.iter().map(LineItem::subtotal).sum()
    }

    pub fn product_ids(&self) -> Vec<ProductId> {
        self.0.iter().map(LineItem::product_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let snapshot = CartSnapshot::new(vec![
            LineItem::new(Product::new(1, "Lamp", 10.0, 3), 2),
            LineItem::new(Product::new(2, "Rug", 2.5, 8), 1),
        ]);

        assert_eq!(snapshot.item_count(), 3);
        assert_eq!(snapshot.total_price(), 22.5);
        assert_eq!(snapshot.quantity_of(ProductId(2)), 1);
        assert_eq!(snapshot.quantity_of(ProductId(9)), 0);
    }

    #[test]
    fn test_item_count_saturates() {
        let snapshot = CartSnapshot::new(vec![
            LineItem::new(Product::new(1, "Lamp", 10.0, 3), u32::MAX),
            LineItem::new(Product::new(2, "Rug", 2.5, 8), 1),
        ]);
        assert_eq!(snapshot.item_count(), u32::MAX);
    }

    #[test]
    fn test_persisted_layout() {
        let snapshot = CartSnapshot::new(vec![LineItem::new(Product::new(4, "Pen", 1.0, 9), 2)]);
        let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json[0]["quantity"], 2);
        assert_eq!(json[0]["product"]["ProductId"], 4);
        assert_eq!(json[0]["product"]["ProductName"], "Pen");
    }
}
