use crate::backend::BackendError;
use thiserror::Error;

/// Errors surfaced to the site by the query layer and the admin editors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// No backend is attached yet; nothing was sent.
    #[error("Actor not available")]
    ActorNotReady,

    /// The backend rejected or failed the call.
    #[error(transparent)]
    Remote(#[from] BackendError),

    /// A form was submitted with missing or malformed fields.
    #[error("Validation error: {0}")]
    Validation(String),
}
