//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list` and `delete`
//! built on top of the generic `ResourceClient`, with framework errors mapped into the
//! resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read and delete operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Image { id: String }
/// #[derive(Debug)] struct ImageCreate;
/// #[derive(Debug)] struct ImageUpdate;
/// #[derive(Debug)] enum ImageAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// enum ImageError {
///     #[error("Actor communication error: {0}")]
///     ActorCommunicationError(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Image {
///     type Id = String;
///     type Create = ImageCreate;
///     type Update = ImageUpdate;
///     type Query = ();
///     type Action = ImageAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = ImageError;
///
///     fn from_create_params(id: String, _: ImageCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: ImageUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: ImageAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct GalleryClient {
///     inner: ResourceClient<Image>,
/// }
///
/// impl ActorClient<Image> for GalleryClient {
///     type Error = ImageError;
///
///     fn inner(&self) -> &ResourceClient<Image> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ImageError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// async fn usage(client: GalleryClient) {
///     // get(), list() and delete() are provided automatically
///     let _ = client.list(()).await;
///     let _ = client.delete("default-1".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity matching `query`, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
