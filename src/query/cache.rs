use super::key::{Mutation, QueryKey};
use crate::model::{GalleryImage, MenuCategory, MenuItem, RestaurantProfile, UserProfile, UserRole};
use tracing::debug;

/// Result of the last fetch of one key; `None` when never fetched or invalidated.
pub(crate) type Slot<T> = Option<Result<T, String>>;

/// One typed slot per [`QueryKey`].
#[derive(Debug, Default)]
pub struct QueryCache {
    pub(crate) caller_profile: Slot<Option<UserProfile>>,
    pub(crate) caller_role: Slot<UserRole>,
    pub(crate) restaurant_profile: Slot<RestaurantProfile>,
    pub(crate) menu_categories: Slot<Vec<MenuCategory>>,
    pub(crate) menu_items: Slot<Vec<MenuItem>>,
    pub(crate) gallery_images: Slot<Vec<GalleryImage>>,
}

impl QueryCache {
    /// True when `key` holds a result (successful or failed).
    pub fn contains(&self, key: QueryKey) -> bool {
        match key {
            QueryKey::CallerProfile => self.caller_profile.is_some(),
            QueryKey::CallerRole => self.caller_role.is_some(),
            QueryKey::RestaurantProfile => self.restaurant_profile.is_some(),
            QueryKey::MenuCategories => self.menu_categories.is_some(),
            QueryKey::MenuItems => self.menu_items.is_some(),
            QueryKey::GalleryImages => self.gallery_images.is_some(),
        }
    }

    pub fn invalidate(&mut self, key: QueryKey) {
        debug!(?key, "Invalidated");
        match key {
            QueryKey::CallerProfile => self.caller_profile = None,
            QueryKey::CallerRole => self.caller_role = None,
            QueryKey::RestaurantProfile => self.restaurant_profile = None,
            QueryKey::MenuCategories => self.menu_categories = None,
            QueryKey::MenuItems => self.menu_items = None,
            QueryKey::GalleryImages => self.gallery_images = None,
        }
    }

    /// Drops every key `mutation` makes stale.
    pub fn apply(&mut self, mutation: Mutation) {
        for key in mutation.invalidates() {
            self.invalidate(*key);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QueryCache {
        QueryCache {
            caller_profile: Some(Ok(None)),
            caller_role: Some(Ok(UserRole::Admin)),
            restaurant_profile: Some(Ok(RestaurantProfile::seeded())),
            menu_categories: Some(Ok(vec![MenuCategory::new("6", "B.B.Q")])),
            menu_items: Some(Ok(Vec::new())),
            gallery_images: Some(Err("Actor closed".to_string())),
        }
    }

    #[test]
    fn test_apply_drops_only_listed_keys() {
        let mut cache = filled();
        cache.apply(Mutation::DeleteCategory);

        assert!(!cache.contains(QueryKey::MenuCategories));
        assert!(!cache.contains(QueryKey::MenuItems));
        for key in [
            QueryKey::CallerProfile,
            QueryKey::CallerRole,
            QueryKey::RestaurantProfile,
            QueryKey::GalleryImages,
        ] {
            assert!(cache.contains(key), "{key:?} should survive");
        }
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut cache = filled();
        cache.clear();
        for key in QueryKey::ALL {
            assert!(!cache.contains(key));
        }
    }
}
