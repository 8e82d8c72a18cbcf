//! Error types for the profile actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during restaurant profile operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// The profile record is missing from the store.
    #[error("Restaurant profile not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProfileError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProfileError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProfileError>() {
                Ok(own) => *own,
                Err(other) => ProfileError::ActorCommunicationError(other.to_string()),
            },
            other => ProfileError::ActorCommunicationError(other.to_string()),
        }
    }
}
