//! # Framework Errors
//!
//! Common error types used between a [`StateClient`](crate::framework::StateClient) and the
//! [`StateActor`](crate::framework::StateActor) it talks to.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}
