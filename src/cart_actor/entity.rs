//! [`ActorState`] implementation that lets a [`CartStore`] be hosted by a
//! [`StateActor`](crate::framework::StateActor).

use super::actions::{CartAction, CartActionResult};
use super::store::CartStore;
use crate::framework::ActorState;
use crate::model::CartSnapshot;
use std::convert::Infallible;
use tracing::info;

impl ActorState for CartStore {
    type Snapshot = CartSnapshot;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ();
    type Error = Infallible;

    fn snapshot(&self) -> CartSnapshot {
        CartStore::snapshot(self)
    }

    /// Applies one cart operation.
    ///
    /// Persistence failures are absorbed inside the store, so no action can fail.
    fn handle_action(&mut self, action: CartAction, _ctx: &()) -> Result<CartActionResult, Infallible> {
        let result = match action {
            CartAction::Add(product) => {
                self.add(product);
                CartActionResult::Updated(CartStore::snapshot(self))
            }
            CartAction::Increase(id) => {
                self.increase_quantity(id);
                CartActionResult::Updated(CartStore::snapshot(self))
            }
            CartAction::Decrease(id) => {
                self.decrease_quantity(id);
                CartActionResult::Updated(CartStore::snapshot(self))
            }
            CartAction::Remove(id) => {
                self.remove_from_cart(id);
                CartActionResult::Updated(CartStore::snapshot(self))
            }
            CartAction::Clear => {
                self.clear_cart();
                CartActionResult::Updated(CartStore::snapshot(self))
            }
            CartAction::Checkout => CartActionResult::CheckedOut(self.take_all()),
            CartAction::SubscribeItems(observer) => {
                CartActionResult::Subscribed(self.subscribe_items(observer))
            }
            CartAction::SubscribeCount(observer) => {
                CartActionResult::Subscribed(self.subscribe_count(observer))
            }
            CartAction::Unsubscribe(id) => CartActionResult::Unsubscribed(self.unsubscribe(id)),
            CartAction::ItemCount => CartActionResult::ItemCount(self.item_count()),
        };
        Ok(result)
    }

    fn on_stop(&mut self, _ctx: &()) {
        info!(key = %self.key(), count = self.item_count(), "Cart closed");
    }
}
