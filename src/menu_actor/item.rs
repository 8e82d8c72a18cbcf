//! [`ActorEntity`] implementation for [`MenuItem`].

use super::MenuError;
use crate::model::{ItemQuery, MenuItem, MenuItemCreate, MenuItemUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn check_price(price: f64) -> Result<f64, MenuError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(MenuError::InvalidPrice(price))
    }
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = String;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Query = ItemQuery;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: String, params: MenuItemCreate) -> Result<Self, Self::Error> {
        let price = check_price(params.price)?;
        Ok(Self::new(
            id,
            params.category_id,
            params.name,
            params.description,
            price,
        ))
    }

    fn matches(&self, query: &ItemQuery) -> bool {
        match query {
            ItemQuery::All => true,
            ItemQuery::Category(category_id) => &self.category_id == category_id,
        }
    }

    /// Applies the update only if every field in it is valid.
    async fn on_update(
        &mut self,
        update: MenuItemUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
