//! Error types for the gallery actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during gallery operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GalleryError {
    /// The requested image was not found.
    #[error("Gallery image not found: {0}")]
    NotFound(String),

    /// An image with this id already exists.
    #[error("Gallery image already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for GalleryError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => GalleryError::NotFound(id),
            FrameworkError::AlreadyExists(id) => GalleryError::AlreadyExists(id),
            other => GalleryError::ActorCommunicationError(other.to_string()),
        }
    }
}
