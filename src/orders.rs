//! Order list and order detail views.
//!
//! Orders only carry product ids and quantities; prices and names come from the product
//! catalog and the buyer from the customer list. Everything here is a pure join over those
//! three lists.

use crate::model::{Customer, Order, OrderId, Product, ProductId, UserId};

/// Shown in place of a buyer that is missing from the customer list.
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";

/// A catalog product together with how many of it an order contains.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedProduct {
    pub product: Product,
    pub quantity: u32,
}

impl OrderedProduct {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Σ price × quantity over the order's products that exist in `products`.
///
/// Unknown products contribute nothing.
pub fn order_total(order: &Order, products: &[Product]) -> f64 {
    order
        .products
        .iter()
        .filter_map(|line| {
            products
                .iter()
                .find(|product| product.id == line.product_id)
                .map(|product| product.price * f64::from(line.quantity))
        })
        .sum()
}

pub fn customer_name<'a>(customers: &'a [Customer], user_id: &UserId) -> &'a str {
    customers
        .iter()
        .find(|customer| customer.id == *user_id)
        .map_or(UNKNOWN_CUSTOMER, |customer| customer.name.as_str())
}

/// Joins an order's lines with the catalog, skipping products the catalog doesn't list.
pub fn products_in_order(order: &Order, products: &[Product]) -> Vec<OrderedProduct> {
    order
        .products
        .iter()
        .filter_map(|line| {
            products
                .iter()
                .find(|product| product.id == line.product_id)
                .map(|product| OrderedProduct {
                    product: product.clone(),
                    quantity: line.quantity,
                })
        })
        .collect()
}

/// One row of the order list.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: OrderId,
    pub date: String,
    pub customer_name: String,
    pub payment_type: String,
    pub total: f64,
}

pub fn summarize(orders: &[Order], products: &[Product], customers: &[Customer]) -> Vec<OrderSummary> {
    orders
        .iter()
        .map(|order| OrderSummary {
            id: order.id,
            date: order.date.clone(),
            customer_name: customer_name(customers, &order.user_id).to_string(),
            payment_type: order.payment_type.clone(),
            total: order_total(order, products),
        })
        .collect()
}

/// Everything the order detail page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub order: Order,
    pub products: Vec<OrderedProduct>,
    pub customer: Option<Customer>,
}

impl OrderDetail {
    pub fn new(order: Order, products: &[Product], customers: &[Customer]) -> Self {
        let lines = products_in_order(&order, products);
        let customer = customers
            .iter()
            .find(|customer| customer.id == order.user_id)
            .cloned();
        Self {
            order,
            products: lines,
            customer,
        }
    }

    /// Quantity of `product_id` in the order, 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.order.quantity_of(product_id)
    }

    pub fn total(&self) -> f64 {
        self.products.iter().map(OrderedProduct::subtotal).sum()
    }

    pub fn customer_name(&self) -> &str {
        self.customer
            .as_ref()
            .map_or(UNKNOWN_CUSTOMER, |customer| customer.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductInOrder;

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Lamp", 10.0, 3),
            Product::new(2, "Rug", 25.0, 8),
        ]
    }

    fn customers() -> Vec<Customer> {
        vec![Customer {
            id: UserId::from("u1"),
            name: "Ada".to_string(),
            ..Customer::default()
        }]
    }

    fn order(user: &str) -> Order {
        Order {
            id: OrderId(7),
            date: "2024-01-02".to_string(),
            user_id: UserId::from(user),
            products: vec![
                ProductInOrder {
                    product_id: ProductId(1),
                    quantity: 2,
                },
                ProductInOrder {
                    product_id: ProductId(99),
                    quantity: 5,
                },
                ProductInOrder {
                    product_id: ProductId(2),
                    quantity: 1,
                },
            ],
            payment_type: "Cash".to_string(),
        }
    }

    #[test]
    fn test_order_total_skips_unknown_products() {
        assert_eq!(order_total(&order("u1"), &products()), 45.0);
        assert_eq!(order_total(&order("u1"), &[]), 0.0);
    }

    #[test]
    fn test_customer_name_fallback() {
        assert_eq!(customer_name(&customers(), &UserId::from("u1")), "Ada");
        assert_eq!(customer_name(&customers(), &UserId::from("nobody")), UNKNOWN_CUSTOMER);
    }

    #[test]
    fn test_order_detail() {
        let detail = OrderDetail::new(order("u1"), &products(), &customers());

        assert_eq!(detail.products.len(), 2);
        assert_eq!(detail.total(), 45.0);
        assert_eq!(detail.quantity_of(ProductId(1)), 2);
        assert_eq!(detail.quantity_of(ProductId(3)), 0);
        assert_eq!(detail.customer_name(), "Ada");

        let orphan = OrderDetail::new(order("ghost"), &products(), &customers());
        assert!(orphan.customer.is_none());
        assert_eq!(orphan.customer_name(), UNKNOWN_CUSTOMER);
    }

    #[test]
    fn test_summarize() {
        let rows = summarize(&[order("u1")], &products(), &customers());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_name, "Ada");
        assert_eq!(rows[0].total, 45.0);
    }
}
