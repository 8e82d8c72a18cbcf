//! Error types for the menu actors.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during menu category and menu item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested category or item was not found.
    #[error("Menu entry not found: {0}")]
    NotFound(String),

    /// A category or item with this id already exists.
    #[error("Menu entry already exists: {0}")]
    AlreadyExists(String),

    /// Prices are finite and never negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::AlreadyExists(id) => MenuError::AlreadyExists(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<MenuError>() {
                Ok(own) => *own,
                Err(other) => MenuError::ActorCommunicationError(other.to_string()),
            },
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
