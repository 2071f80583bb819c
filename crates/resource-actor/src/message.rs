//! # Generic Messages
//!
//! Request envelopes exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor to request an operation.
///
/// The variants cover the lifecycle of a stored resource:
///
/// - **Create**: allocates an id and builds the entity from [`ActorEntity::Create`].
/// - **Get**: fetches one entity by id.
/// - **Update**: applies an [`ActorEntity::Update`] payload.
/// - **Delete**: removes the entity.
/// - **Action**: runs a resource-specific [`ActorEntity::Action`].
/// - **List**: snapshot of every entity, ordered by id.
/// - **Restore**: replaces the whole store with the given entities (backup import).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Restore {
        items: Vec<T>,
        respond_to: Response<usize>,
    },
}
