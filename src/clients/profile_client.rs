use crate::model::RestaurantProfile;
use crate::profile_actor::{ProfileError, PROFILE_ID};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the restaurant profile actor.
#[derive(Clone)]
pub struct ProfileClient {
    inner: ResourceClient<RestaurantProfile>,
}

impl ProfileClient {
    pub fn new(inner: ResourceClient<RestaurantProfile>) -> Self {
        Self { inner }
    }
}

impl ActorClient<RestaurantProfile> for ProfileClient {
    type Error = ProfileError;

    fn inner(&self) -> &ResourceClient<RestaurantProfile> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProfileError::from(e)
    }
}

impl ProfileClient {
    /// Fetches the restaurant profile.
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self) -> Result<RestaurantProfile, ProfileError> {
        debug!("Sending request");
        self.get(PROFILE_ID.to_string())
            .await?
            .ok_or_else(|| ProfileError::NotFound(PROFILE_ID.to_string()))
    }

    /// Replaces the restaurant profile.
    #[instrument(skip(self, profile))]
    pub async fn replace_profile(
        &self,
        profile: RestaurantProfile,
    ) -> Result<RestaurantProfile, ProfileError> {
        debug!(?profile, "Sending request");
        self.inner
            .update(PROFILE_ID.to_string(), profile)
            .await
            .map_err(Self::map_error)
    }
}
