//! Error types for the cart actor.

use thiserror::Error;

/// Errors a [`CartClient`](crate::clients::CartClient) can return.
///
/// Cart operations themselves never fail; only talking to the actor can.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// The actor answered an action with a result of the wrong kind.
    #[error("Unexpected response to {0}")]
    UnexpectedResponse(&'static str),
}

