//! # ActorClient Trait
//!
//! Provides a common interface for domain clients, adding a default `snapshot` method built on
//! top of a generic `StateClient`.
use crate::framework::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard read operation.
///
/// A domain client wraps a [`StateClient`], exposes it through [`ActorClient::inner`], and says
/// how framework failures become its own error type in [`ActorClient::map_error`].
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an owned copy of the actor's state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
