//! The restaurant profile store: a single record under a fixed key.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProfileClient;
use crate::model::RestaurantProfile;
use actor_framework::ResourceActor;

/// Key under which the one restaurant profile is stored.
pub const PROFILE_ID: &str = "restaurant";

/// Creates the profile actor, seeded with [`RestaurantProfile::seeded`].
pub fn new(buffer_size: usize) -> (ResourceActor<RestaurantProfile>, ProfileClient) {
    let seed = [(PROFILE_ID.to_string(), RestaurantProfile::seeded())];
    let (actor, generic_client) = ResourceActor::with_entries(buffer_size, seed);
    (actor, ProfileClient::new(generic_client))
}
