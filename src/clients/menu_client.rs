use crate::menu_actor::MenuError;
use crate::model::{MenuCategory, MenuItem};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the menu category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<MenuCategory>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<MenuCategory>) -> Self {
        Self { inner }
    }
}

impl ActorClient<MenuCategory> for CategoryClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuCategory> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}

impl CategoryClient {
    #[instrument(skip(self))]
    pub async fn create_category(&self, category: MenuCategory) -> Result<String, MenuError> {
        debug!("Sending request");
        self.inner
            .create(category.id.clone(), category.into())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_category(&self, category: MenuCategory) -> Result<MenuCategory, MenuError> {
        debug!("Sending request");
        self.inner
            .update(category.id.clone(), category.into())
            .await
            .map_err(Self::map_error)
    }
}

/// Client for interacting with the menu item actor.
#[derive(Clone)]
pub struct MenuItemClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuItemClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

impl ActorClient<MenuItem> for MenuItemClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}

impl MenuItemClient {
    #[instrument(skip(self))]
    pub async fn create_item(&self, item: MenuItem) -> Result<String, MenuError> {
        debug!("Sending request");
        self.inner
            .create(item.id.clone(), item.into())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(&self, item: MenuItem) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner
            .update(item.id.clone(), item.into())
            .await
            .map_err(Self::map_error)
    }
}
