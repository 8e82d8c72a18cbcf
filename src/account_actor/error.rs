//! Error types for the account actor.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// No account is stored for the principal.
    #[error("Account not found: {0}")]
    NotFound(String),

    /// An account for the principal already exists.
    #[error("Account already exists: {0}")]
    AlreadyExists(String),

    /// The anonymous principal never owns an account.
    #[error("Anonymous principal cannot own an account")]
    Anonymous,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AccountError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => AccountError::NotFound(id),
            FrameworkError::AlreadyExists(id) => AccountError::AlreadyExists(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<AccountError>() {
                Ok(own) => *own,
                Err(other) => AccountError::ActorCommunicationError(other.to_string()),
            },
            other => AccountError::ActorCommunicationError(other.to_string()),
        }
    }
}
