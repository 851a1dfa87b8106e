use crate::cart_actor::{CartAction, CartActionResult, CartError, CartStore};
use crate::framework::{ActorClient, FrameworkError, Observer, StateClient, SubscriptionId};
use crate::model::{CartSnapshot, Product, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
///
/// This is the only way the rest of the application touches the cart. It is cheap to clone and
/// every clone talks to the same cart.
#[derive(Clone)]
pub struct CartClient {
    inner: StateClient<CartStore>,
}

impl CartClient {
    pub fn new(inner: StateClient<CartStore>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, product: Product) -> Result<CartSnapshot, CartError> {
        debug!("Sending request");
        self.mutate(CartAction::Add(product), "Add").await
    }

    #[instrument(skip(self))]
    pub async fn increase_quantity(&self, id: ProductId) -> Result<CartSnapshot, CartError> {
        debug!("Sending request");
        self.mutate(CartAction::Increase(id), "Increase").await
    }

    #[instrument(skip(self))]
    pub async fn decrease_quantity(&self, id: ProductId) -> Result<CartSnapshot, CartError> {
        debug!("Sending request");
        self.mutate(CartAction::Decrease(id), "Decrease").await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: ProductId) -> Result<CartSnapshot, CartError> {
        debug!("Sending request");
        self.mutate(CartAction::Remove(id), "Remove").await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<CartSnapshot, CartError> {
        debug!("Sending request");
        self.mutate(CartAction::Clear, "Clear").await
    }

    /// Empties the cart and returns its contents as they were just before.
    ///
    /// Nothing another handle sends can land between the read and the clear.
    #[instrument(skip(self))]
    pub async fn checkout_cart(&self) -> Result<CartSnapshot, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(CartAction::Checkout).await {
            Ok(CartActionResult::CheckedOut(snapshot)) => Ok(snapshot),
            Ok(_) => Err(CartError::UnexpectedResponse("Checkout")),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Current line items, in cart order.
    pub async fn cart_items(&self) -> Result<CartSnapshot, CartError> {
        self.snapshot().await
    }

    #[instrument(skip(self))]
    pub async fn item_count(&self) -> Result<u32, CartError> {
        match self.inner.perform_action(CartAction::ItemCount).await {
            Ok(CartActionResult::ItemCount(count)) => Ok(count),
            Ok(_) => Err(CartError::UnexpectedResponse("ItemCount")),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Registers `callback` for every future snapshot.
    ///
    /// The callback runs on the cart task, once with the current snapshot before this returns and
    /// then after each mutation. It must not call back into the cart.
    #[instrument(skip(self, callback))]
    pub async fn subscribe_items(
        &self,
        callback: impl Fn(&CartSnapshot) + Send + 'static,
    ) -> Result<SubscriptionId, CartError> {
        let action = CartAction::SubscribeItems(Observer::new(callback));
        self.subscribe(action, "SubscribeItems").await
    }

    /// Registers `callback` for every future item count. Same delivery rules as
    /// [`CartClient::subscribe_items`].
    #[instrument(skip(self, callback))]
    pub async fn subscribe_count(
        &self,
        callback: impl Fn(&u32) + Send + 'static,
    ) -> Result<SubscriptionId, CartError> {
        let action = CartAction::SubscribeCount(Observer::new(callback));
        self.subscribe(action, "SubscribeCount").await
    }

    /// Returns `false` if the subscription was already gone.
    #[instrument(skip(self))]
    pub async fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, CartError> {
        match self.inner.perform_action(CartAction::Unsubscribe(id)).await {
            Ok(CartActionResult::Unsubscribed(found)) => Ok(found),
            Ok(_) => Err(CartError::UnexpectedResponse("Unsubscribe")),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    async fn mutate(
        &self,
        action: CartAction,
        name: &'static str,
    ) -> Result<CartSnapshot, CartError> {
        match self.inner.perform_action(action).await {
            Ok(CartActionResult::Updated(snapshot)) => Ok(snapshot),
            Ok(_) => Err(CartError::UnexpectedResponse(name)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    async fn subscribe(
        &self,
        action: CartAction,
        name: &'static str,
    ) -> Result<SubscriptionId, CartError> {
        match self.inner.perform_action(action).await {
            Ok(CartActionResult::Subscribed(id)) => Ok(id),
            Ok(_) => Err(CartError::UnexpectedResponse(name)),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<CartStore> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StateClient<CartStore> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::ActorCommunicationError(e.to_string())
    }
}
