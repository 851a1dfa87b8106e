//! # Generic State Actor
//!
//! This module defines the `StateActor`, the "server" half of the framework. It owns exactly one
//! [`ActorState`] value and processes requests for it sequentially.

use crate::framework::client::StateClient;
use crate::framework::entity::ActorState;
use crate::framework::error::FrameworkError;
use crate::framework::message::StateRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single piece of state.
///
/// # Concurrency Model
/// The actor runs in its own Tokio task and handles one request at a time. The state is
/// exclusively owned by that task, so no `Mutex` or `RwLock` guards it, and any number of
/// [`StateClient`] clones may send requests concurrently.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StateActor::new(buffer, state)` returns the actor and its client.
/// 2.  **Wire & Run**: spawn `actor.run(context)` on the runtime.
/// 3.  **Use**: hand clones of the client to every consumer.
///
/// ```rust
/// use std::convert::Infallible;
/// use storefront_cart::framework::{ActorState, StateActor};
///
/// #[derive(Debug)]
/// enum CounterAction { Increment }
///
/// struct Counter(u32);
///
/// impl ActorState for Counter {
///     type Snapshot = u32;
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = Infallible;
///
///     fn snapshot(&self) -> u32 { self.0 }
///     fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, Infallible> {
///         self.0 += 1;
///         Ok(self.0)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StateActor::new(10, Counter(0));
///     tokio::spawn(actor.run(()));
///
///     let value = client.perform_action(CounterAction::Increment).await.unwrap();
///     assert_eq!(value, 1);
/// }
/// ```
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state` and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `state` - The value the actor will own.
    pub fn new(buffer_size: usize, state: S) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Returns the final state so callers awaiting the task can inspect it.
    pub async fn run(mut self, context: S::Context) -> S {
        // Extract just the type name (e.g., "CartStore" instead of the full module path)
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        if let Err(e) = self.state.on_start(&context) {
            warn!(state_type, error = %e, "on_start failed");
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
                StateRequest::Action { action, respond_to } => {
                    debug!(state_type, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action, &context)
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    match &result {
                        Ok(_) => debug!(state_type, "Action ok"),
                        Err(e) => warn!(state_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        self.state.on_stop(&context);
        info!(state_type, "Shutdown");
        self.state
    }
}
