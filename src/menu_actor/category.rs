//! [`ActorEntity`] implementation for [`MenuCategory`].
//!
//! Deleting a category removes its items first. If any item delete fails the category
//! stays in place and the error is returned. The cascade is not atomic: items deleted
//! before the failure stay deleted.

use super::MenuError;
use crate::clients::MenuItemClient;
use crate::model::{CategoryCreate, CategoryUpdate, ItemQuery, MenuCategory};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for MenuCategory {
    type Id = String;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Query = ();
    type Action = ();
    type ActionResult = ();
    type Context = MenuItemClient;
    type Error = MenuError;

    fn from_create_params(id: String, params: CategoryCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name))
    }

    async fn on_update(
        &mut self,
        update: CategoryUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn on_delete(&self, items: &Self::Context) -> Result<(), Self::Error> {
        let contained = items.list(ItemQuery::Category(self.id.clone())).await?;
        debug!(category_id = %self.id, count = contained.len(), "Deleting items of category");
        for item in contained {
            items.delete(item.id).await?;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
