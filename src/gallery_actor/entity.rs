//! [`ActorEntity`] implementation for [`GalleryImage`].

use super::GalleryError;
use crate::model::{GalleryImage, ImageCreate, ImageUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for GalleryImage {
    type Id = String;
    type Create = ImageCreate;
    type Update = ImageUpdate;
    type Query = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = GalleryError;

    fn from_create_params(id: String, params: ImageCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.filename, params.alt_text))
    }

    /// # Fields Updated
    /// - `filename`: path relative to the public asset directory
    /// - `alt_text`: caption shown with the image
    async fn on_update(&mut self, update: ImageUpdate, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if let Some(filename) = update.filename {
            self.filename = filename;
        }
        if let Some(alt_text) = update.alt_text {
            self.alt_text = alt_text;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
