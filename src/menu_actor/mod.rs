//! Menu categories and menu items.
//!
//! Two actors share this module. The category actor is started with the item client
//! as its context, so deleting a category also deletes the items filed under it.

pub mod category;
pub mod error;
pub mod item;

pub use error::*;

use crate::clients::{CategoryClient, MenuItemClient};
use crate::model::{MenuCategory, MenuItem};
use actor_framework::ResourceActor;

/// Creates the category actor and its client.
///
/// Run it with a [`MenuItemClient`] as context.
pub fn new_categories(buffer_size: usize) -> (ResourceActor<MenuCategory>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CategoryClient::new(generic_client))
}

/// Creates the menu item actor and its client.
pub fn new_items(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuItemClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuItemClient::new(generic_client))
}
