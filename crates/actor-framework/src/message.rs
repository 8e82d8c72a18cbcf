//! # Generic Messages
//!
//! The message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map onto the standard resource lifecycle, plus `List` for collection
/// reads and `Action` for resource-specific logic that doesn't fit CRUD.
///
/// - **Create**: Stores a new resource under a caller-chosen id.
/// - **Get**: Fetches one resource by id.
/// - **List**: Returns every resource matching [`ActorEntity::Query`], in insertion order.
/// - **Update**: Modifies an existing resource through [`ActorEntity::on_update`].
/// - **Delete**: Removes a resource after [`ActorEntity::on_delete`] succeeds.
/// - **Action**: Executes a custom [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
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
}
