//! Gallery image metadata. Image bytes live in the public asset directory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::GalleryClient;
use crate::model::GalleryImage;
use actor_framework::ResourceActor;

/// Creates a new gallery actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<GalleryImage>, GalleryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, GalleryClient::new(generic_client))
}
