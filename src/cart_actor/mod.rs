//! The cart: line items, persistence and change notification.

mod actions;
pub mod entity;
pub mod error;
pub mod store;

pub use actions::*;
pub use error::*;
pub use store::{CartStore, CART_KEY};

use crate::clients::CartClient;
use crate::framework::StateActor;
use crate::storage::StorageAdapter;

/// Restores the cart from `storage` and wraps it in an actor and its client.
///
/// The actor does nothing until its `run` future is spawned.
pub fn new(
    storage: Box<dyn StorageAdapter>,
    key: impl Into<String>,
    buffer_size: usize,
) -> (StateActor<CartStore>, CartClient) {
    let store = CartStore::load(storage, key);
    let (actor, generic_client) = StateActor::new(buffer_size, store);
    (actor, CartClient::new(generic_client))
}
