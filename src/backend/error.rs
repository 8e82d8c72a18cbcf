//! Errors returned by [`Backend`](super::Backend) operations.

use crate::account_actor::AccountError;
use crate::gallery_actor::GalleryError;
use crate::menu_actor::MenuError;
use crate::profile_actor::ProfileError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BackendError {
    /// The caller lacks the role the operation requires.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Gallery(#[from] GalleryError),

    #[error(transparent)]
    Account(#[from] AccountError),
}
