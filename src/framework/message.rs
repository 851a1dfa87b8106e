//! # Generic Messages
//!
//! Message types exchanged between a `StateClient` and a `StateActor`.

use crate::framework::entity::ActorState;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a [`StateActor`](crate::framework::StateActor).
///
/// There are only two shapes of request, because a state actor owns a single value:
///
/// - **Snapshot**: read an owned copy of the state.
/// - **Action**: apply one [`ActorState::Action`] and return its result.
#[derive(Debug)]
pub enum StateRequest<S: ActorState> {
    Snapshot {
        respond_to: Response<S::Snapshot>,
    },
    Action {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
}
