//! [`ActorEntity`] implementation for [`RestaurantProfile`].

use super::ProfileError;
use crate::model::RestaurantProfile;
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for RestaurantProfile {
    type Id = String;
    type Create = RestaurantProfile;
    type Update = RestaurantProfile;
    type Query = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ProfileError;

    fn from_create_params(_id: String, params: RestaurantProfile) -> Result<Self, Self::Error> {
        Ok(params)
    }

    /// Replaces the whole profile.
    async fn on_update(
        &mut self,
        update: RestaurantProfile,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        *self = update;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
