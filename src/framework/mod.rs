//! Generic single-state actor framework.
//!
//! This module provides the building blocks for hosting one piece of mutable state behind a
//! task that owns it, and for broadcasting changes of that state to observers.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that hosted state implements
//! - [`StateActor`] - Generic actor that owns the state and applies requests in order
//! - [`StateClient`] - Cloneable, type-safe handle for sending requests
//! - [`ActorClient`] - Trait domain clients implement to inherit `snapshot()`
//! - [`Observable`] - Replay-latest multicast value holder
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod observable;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use entity::ActorState;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use observable::{Observable, Observer, SubscriptionId};
