//! # Backend Facade
//!
//! [`Backend`] is the remote interface the site talks to. It bundles the resource
//! clients, checks the caller's access for every operation and translates the calls
//! into actor requests. Reads are open to anyone; writes need the admin role, except
//! saving one's own user profile, which needs any signed-in identity.

mod error;

pub use error::BackendError;

use crate::clients::{AccountClient, CategoryClient, GalleryClient, MenuItemClient, ProfileClient};
use crate::model::{
    GalleryImage, ItemQuery, MenuCategory, MenuItem, Principal, RestaurantProfile, UserProfile,
    UserRole,
};
use actor_framework::ActorClient;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct Backend {
    profile: ProfileClient,
    categories: CategoryClient,
    items: MenuItemClient,
    gallery: GalleryClient,
    accounts: AccountClient,
}

impl Backend {
    pub fn new(
        profile: ProfileClient,
        categories: CategoryClient,
        items: MenuItemClient,
        gallery: GalleryClient,
        accounts: AccountClient,
    ) -> Self {
        Self {
            profile,
            categories,
            items,
            gallery,
            accounts,
        }
    }

    async fn require_admin(&self, caller: &Principal, operation: &str) -> Result<(), BackendError> {
        match self.accounts.role_of(caller).await? {
            UserRole::Admin => Ok(()),
            role => {
                warn!(%caller, %role, operation, "Rejected");
                Err(BackendError::Unauthorized(format!(
                    "{operation} requires the admin role"
                )))
            }
        }
    }

    fn require_identity(caller: &Principal, operation: &str) -> Result<(), BackendError> {
        if caller.is_anonymous() {
            warn!(operation, "Rejected anonymous caller");
            return Err(BackendError::Unauthorized(format!(
                "{operation} requires a signed-in caller"
            )));
        }
        Ok(())
    }

    // --- Restaurant profile ---

    #[instrument(skip(self))]
    pub async fn get_restaurant_profile(
        &self,
        _caller: &Principal,
    ) -> Result<RestaurantProfile, BackendError> {
        Ok(self.profile.fetch_profile().await?)
    }

    #[instrument(skip(self, profile))]
    pub async fn update_restaurant_profile(
        &self,
        caller: &Principal,
        profile: RestaurantProfile,
    ) -> Result<(), BackendError> {
        self.require_admin(caller, "updateRestaurantProfile").await?;
        self.profile.replace_profile(profile).await?;
        info!(%caller, "Restaurant profile updated");
        Ok(())
    }

    // --- Menu categories ---

    #[instrument(skip(self))]
    pub async fn get_all_menu_categories(
        &self,
        _caller: &Principal,
    ) -> Result<Vec<MenuCategory>, BackendError> {
        Ok(self.categories.list(()).await?)
    }

    #[instrument(skip(self))]
    pub async fn add_menu_category(
        &self,
        caller: &Principal,
        category: MenuCategory,
    ) -> Result<(), BackendError> {
        self.require_admin(caller, "addMenuCategory").await?;
        self.categories.create_category(category).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn update_menu_category(
        &self,
        caller: &Principal,
        category: MenuCategory,
    ) -> Result<(), BackendError> {
        self.require_admin(caller, "updateMenuCategory").await?;
        self.categories.update_category(category).await?;
        Ok(())
    }

    /// Deletes the category and every item filed under it.
    #[instrument(skip(self))]
    pub async fn delete_menu_category(
        &self,
        caller: &Principal,
        category_id: &str,
    ) -> Result<(), BackendError> {
        self.require_admin(caller, "deleteMenuCategory").await?;
        self.categories.delete(category_id.to_string()).await?;
        Ok(())
    }

    // --- Menu items ---

    #[instrument(skip(self))]
    pub async fn get_menu_items_by_category(
        &self,
        _caller: &Principal,
        category_id: &str,
    ) -> Result<Vec<MenuItem>, BackendError> {
        Ok(self
            .items
            .list(ItemQuery::Category(category_id.to_string()))
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn add_menu_item(&self, caller: &Principal, item: MenuItem) -> Result<(), BackendError> {
        self.require_admin(caller, "addMenuItem").await?;
        self.items.create_item(item).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn update_menu_item(
        &self,
        caller: &Principal,
        item: MenuItem,
    ) -> Result<(), BackendError> {
        self.require_admin(caller, "updateMenuItem").await?;
        self.items.update_item(item).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_menu_item(&self, caller: &Principal, item_id: &str) -> Result<(), BackendError> {
        self.require_admin(caller, "deleteMenuItem").await?;
        self.items.delete(item_id.to_string()).await?;
        Ok(())
    }

    // --- Gallery ---

    #[instrument(skip(self))]
    pub async fn get_all_gallery_images(
        &self,
        _caller: &Principal,
    ) -> Result<Vec<GalleryImage>, BackendError> {
        Ok(self.gallery.list(()).await?)
    }

    #[instrument(skip(self))]
    pub async fn add_gallery_image(
        &self,
        caller: &Principal,
        image: GalleryImage,
    ) -> Result<(), BackendError> {
        self.require_admin(caller, "addGalleryImage").await?;
        self.gallery.create_image(image).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn update_gallery_image(
        &self,
        caller: &Principal,
        image: GalleryImage,
    ) -> Result<(), BackendError> {
        self.require_admin(caller, "updateGalleryImage").await?;
        self.gallery.update_image(image).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_gallery_image(
        &self,
        caller: &Principal,
        image_id: &str,
    ) -> Result<(), BackendError> {
        self.require_admin(caller, "deleteGalleryImage").await?;
        self.gallery.delete(image_id.to_string()).await?;
        Ok(())
    }

    // --- Callers and roles ---

    /// The caller's own profile; `None` for anonymous callers and callers without one.
    #[instrument(skip(self))]
    pub async fn get_caller_user_profile(
        &self,
        caller: &Principal,
    ) -> Result<Option<UserProfile>, BackendError> {
        Ok(self.accounts.profile_of(caller).await?)
    }

    #[instrument(skip(self))]
    pub async fn save_caller_user_profile(
        &self,
        caller: &Principal,
        profile: UserProfile,
    ) -> Result<(), BackendError> {
        Self::require_identity(caller, "saveCallerUserProfile")?;
        self.accounts.save_profile(caller.clone(), profile).await?;
        info!(%caller, "Caller profile saved");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_caller_user_role(&self, caller: &Principal) -> Result<UserRole, BackendError> {
        Ok(self.accounts.role_of(caller).await?)
    }

    #[instrument(skip(self))]
    pub async fn is_caller_admin(&self, caller: &Principal) -> Result<bool, BackendError> {
        Ok(self.accounts.role_of(caller).await? == UserRole::Admin)
    }

    /// Profile of `user`; callers may read their own, admins anyone's.
    #[instrument(skip(self))]
    pub async fn get_user_profile(
        &self,
        caller: &Principal,
        user: &Principal,
    ) -> Result<Option<UserProfile>, BackendError> {
        if caller != user {
            self.require_admin(caller, "getUserProfile").await?;
        }
        Ok(self.accounts.profile_of(user).await?)
    }

    #[instrument(skip(self))]
    pub async fn assign_caller_user_role(
        &self,
        caller: &Principal,
        user: &Principal,
        role: UserRole,
    ) -> Result<(), BackendError> {
        self.require_admin(caller, "assignCallerUserRole").await?;
        self.accounts.assign_role(user.clone(), role).await?;
        info!(%caller, %user, %role, "Role assigned");
        Ok(())
    }
}
