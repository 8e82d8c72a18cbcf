use crate::gallery_actor::GalleryError;
use crate::model::GalleryImage;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the gallery actor.
#[derive(Clone)]
pub struct GalleryClient {
    inner: ResourceClient<GalleryImage>,
}

impl GalleryClient {
    pub fn new(inner: ResourceClient<GalleryImage>) -> Self {
        Self { inner }
    }
}

impl ActorClient<GalleryImage> for GalleryClient {
    type Error = GalleryError;

    fn inner(&self) -> &ResourceClient<GalleryImage> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        GalleryError::from(e)
    }
}

impl GalleryClient {
    #[instrument(skip(self))]
    pub async fn create_image(&self, image: GalleryImage) -> Result<String, GalleryError> {
        debug!("Sending request");
        self.inner
            .create(image.id.clone(), image.into())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_image(&self, image: GalleryImage) -> Result<GalleryImage, GalleryError> {
        debug!("Sending request");
        self.inner
            .update(image.id.clone(), image.into())
            .await
            .map_err(Self::map_error)
    }
}
