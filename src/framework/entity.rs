//! # ActorState Trait
//!
//! The `ActorState` trait defines the contract a piece of state must satisfy to be hosted by a
//! [`StateActor`](crate::framework::StateActor). One actor owns exactly one state value for its
//! whole lifetime; everything else in the application talks to it through a cloneable
//! [`StateClient`](crate::framework::StateClient).
//!
//! # Architecture Note
//! The state value never leaves the actor task. Clients ask for a [`ActorState::Snapshot`],
//! which is an owned copy, so a consumer can never mutate the live state behind the actor's back.
//!
//! # Hooks
//! - [`ActorState::on_start`] runs once before the first request is processed.
//! - [`ActorState::on_stop`] runs once after the last client is dropped.
//!
//! Both have empty default implementations.
//!
//! # Run-to-completion
//! The hooks and [`ActorState::handle_action`] are synchronous. A request is fully applied
//! (including any observer notification) before the next one is looked at.

use std::fmt::Debug;

/// State that can be owned and driven by a [`StateActor`](crate::framework::StateActor).
pub trait ActorState: Send + 'static {
    /// Owned, read-only view of the state handed out to clients.
    type Snapshot: Clone + Send + Debug;

    /// Enum of the operations this state understands (e.g. `Add`, `Clear`).
    type Action: Send + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    ///
    /// States whose actions cannot fail use [`std::convert::Infallible`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produce an owned copy of the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Called once, before the first request is processed.
    fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply one action to the state.
    fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Called once, after the request channel has closed.
    fn on_stop(&mut self, _ctx: &Self::Context) {}
}
