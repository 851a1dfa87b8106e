//! Actions for the cart actor.
//!
//! Every mutating action answers with the snapshot taken right after the change, so a caller
//! never has to issue a second request to see what it just did.

use crate::framework::{Observer, SubscriptionId};
use crate::model::{CartSnapshot, Product, ProductId};

/// Operations the [`CartStore`](super::CartStore) understands.
#[derive(Debug)]
pub enum CartAction {
    /// Adds one unit of the product, merging with an existing line item.
    Add(Product),
    /// Adds one unit to an existing line item.
    Increase(ProductId),
    /// Removes one unit; the line item goes away at zero.
    Decrease(ProductId),
    Remove(ProductId),
    Clear,
    /// Empties the cart and answers with what it held, in one step.
    Checkout,
    /// Registers a snapshot observer. It receives the current snapshot immediately.
    SubscribeItems(Observer<CartSnapshot>),
    /// Registers an item-count observer. It receives the current count immediately.
    SubscribeCount(Observer<u32>),
    Unsubscribe(SubscriptionId),
    ItemCount,
}

/// Results from CartActions.
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// Result from the mutating actions - the snapshot after the change
    Updated(CartSnapshot),
    /// Result from Checkout - the snapshot before the cart was emptied
    CheckedOut(CartSnapshot),
    Subscribed(SubscriptionId),
    /// Whether a subscription with that id existed
    Unsubscribed(bool),
    ItemCount(u32),
}
