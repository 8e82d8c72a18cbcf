use super::cache::{QueryCache, Slot};
use super::error::ClientError;
use super::key::{Mutation, QueryKey};
use super::status::QueryStatus;
use crate::backend::{Backend, BackendError};
use crate::model::{
    GalleryImage, MenuCategory, MenuItem, Principal, RestaurantProfile, UserProfile, UserRole,
};
use std::future::Future;
use tracing::{debug, info, instrument, warn};

/// Single-owner client over the backend: cached reads plus invalidating mutations.
///
/// Reads are `Disabled` until [`attach`](Self::attach) provides a backend. A read
/// returns its cached value when the last fetch succeeded, otherwise it fetches, retrying
/// failed attempts up to `retries` times, and caches the outcome. A cached failure is
/// reported by [`peek`](Self::peek) until the next read replaces it.
///
/// Mutations are sent once. Only after the backend answered `Ok` are the keys from
/// [`Mutation::invalidates`] dropped from the cache.
pub struct QueryClient {
    backend: Option<Backend>,
    identity: Option<Principal>,
    cache: QueryCache,
    retries: u32,
}

impl QueryClient {
    pub fn new(retries: u32) -> Self {
        Self {
            backend: None,
            identity: None,
            cache: QueryCache::default(),
            retries,
        }
    }

    /// Makes the backend available; reads become enabled.
    pub fn attach(&mut self, backend: Backend) {
        self.backend = Some(backend);
        self.cache.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.backend.is_some()
    }

    pub fn identity(&self) -> Option<&Principal> {
        self.identity.as_ref()
    }

    #[instrument(skip(self))]
    pub fn sign_in(&mut self, principal: Principal) {
        info!(%principal, "Signed in");
        self.identity = Some(principal);
        self.cache.clear();
    }

    pub fn sign_out(&mut self) {
        info!("Signed out");
        self.identity = None;
        self.cache.clear();
    }

    /// Forgets every cached result.
    pub fn reload(&mut self) {
        self.cache.clear();
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    fn caller(&self) -> Principal {
        self.identity.clone().unwrap_or_else(Principal::anonymous)
    }

    fn is_enabled(&self, key: QueryKey) -> bool {
        if self.backend.is_none() {
            return false;
        }
        match key {
            QueryKey::CallerRole => self.identity.is_some(),
            QueryKey::MenuItems => matches!(
                &self.cache.menu_categories,
                Some(Ok(categories)) if !categories.is_empty()
            ),
            _ => true,
        }
    }

    /// Status of `key` without fetching.
    pub fn peek(&self, key: QueryKey) -> QueryStatus<()> {
        if !self.is_enabled(key) {
            // Items wait on categories; while those are outstanding the items are too.
            if key == QueryKey::MenuItems
                && self.backend.is_some()
                && self.cache.menu_categories.is_none()
            {
                return QueryStatus::Pending;
            }
            return QueryStatus::Disabled;
        }
        let entry = match key {
            QueryKey::CallerProfile => self.cache.caller_profile.as_ref().map(drop_value),
            QueryKey::CallerRole => self.cache.caller_role.as_ref().map(drop_value),
            QueryKey::RestaurantProfile => self.cache.restaurant_profile.as_ref().map(drop_value),
            QueryKey::MenuCategories => self.cache.menu_categories.as_ref().map(drop_value),
            QueryKey::MenuItems => self.cache.menu_items.as_ref().map(drop_value),
            QueryKey::GalleryImages => self.cache.gallery_images.as_ref().map(drop_value),
        };
        entry.map_or(QueryStatus::Pending, QueryStatus::from)
    }

    // --- Reads ---

    pub async fn caller_profile(&mut self) -> QueryStatus<Option<UserProfile>> {
        // `None` is a valid answer, so failures are reported without retrying.
        self.read(QueryKey::CallerProfile, 0, |c| &mut c.caller_profile, |backend, caller| async move {
            backend.get_caller_user_profile(&caller).await
        })
        .await
    }

    pub async fn caller_role(&mut self) -> QueryStatus<UserRole> {
        let retries = self.retries;
        self.read(QueryKey::CallerRole, retries, |c| &mut c.caller_role, |backend, caller| async move {
            backend.get_caller_user_role(&caller).await
        })
        .await
    }

    pub async fn restaurant_profile(&mut self) -> QueryStatus<RestaurantProfile> {
        let retries = self.retries;
        self.read(
            QueryKey::RestaurantProfile,
            retries,
            |c| &mut c.restaurant_profile,
            |backend, caller| async move { backend.get_restaurant_profile(&caller).await },
        )
        .await
    }

    pub async fn menu_categories(&mut self) -> QueryStatus<Vec<MenuCategory>> {
        let retries = self.retries;
        self.read(
            QueryKey::MenuCategories,
            retries,
            |c| &mut c.menu_categories,
            |backend, caller| async move { backend.get_all_menu_categories(&caller).await },
        )
        .await
    }

    /// Items of every category, fetched category by category.
    ///
    /// Reads the categories first; stays `Disabled` while there are none.
    pub async fn menu_items(&mut self) -> QueryStatus<Vec<MenuItem>> {
        let categories = match self.menu_categories().await {
            QueryStatus::Ready(categories) => categories,
            _ => return QueryStatus::Disabled,
        };
        let retries = self.retries;
        self.read(QueryKey::MenuItems, retries, |c| &mut c.menu_items, move |backend, caller| {
            let ids: Vec<String> = categories.iter().map(|c| c.id.clone()).collect();
            async move {
                let mut items = Vec::new();
                for id in ids {
                    items.extend(backend.get_menu_items_by_category(&caller, &id).await?);
                }
                Ok::<_, BackendError>(items)
            }
        })
        .await
    }

    pub async fn gallery_images(&mut self) -> QueryStatus<Vec<GalleryImage>> {
        let retries = self.retries;
        self.read(
            QueryKey::GalleryImages,
            retries,
            |c| &mut c.gallery_images,
            |backend, caller| async move { backend.get_all_gallery_images(&caller).await },
        )
        .await
    }

    async fn read<T, F, Fut>(
        &mut self,
        key: QueryKey,
        retries: u32,
        slot: fn(&mut QueryCache) -> &mut Slot<T>,
        fetch: F,
    ) -> QueryStatus<T>
    where
        T: Clone,
        F: Fn(Backend, Principal) -> Fut,
        Fut: Future<Output = Result<T, BackendError>>,
    {
        if !self.is_enabled(key) {
            return QueryStatus::Disabled;
        }
        // A cached failure is stale: it stays visible to `peek` but the next read fetches again.
        if let Some(Ok(value)) = slot(&mut self.cache) {
            return QueryStatus::Ready(value.clone());
        }
        let Some(backend) = self.backend.clone() else {
            return QueryStatus::Disabled;
        };
        let caller = self.caller();

        let mut attempt = 0;
        let result = loop {
            match fetch(backend.clone(), caller.clone()).await {
                Ok(value) => break Ok(value),
                Err(e) if attempt < retries => {
                    attempt += 1;
                    warn!(?key, attempt, error = %e, "Read failed, retrying");
                }
                Err(e) => {
                    warn!(?key, error = %e, "Read failed");
                    break Err(e.to_string());
                }
            }
        };
        debug!(?key, ok = result.is_ok(), "Fetched");
        *slot(&mut self.cache) = Some(result.clone());
        result.into()
    }

    // --- Mutations ---

    async fn mutate<F, Fut>(&mut self, mutation: Mutation, call: F) -> Result<(), ClientError>
    where
        F: FnOnce(Backend, Principal) -> Fut,
        Fut: Future<Output = Result<(), BackendError>>,
    {
        let backend = self.backend.clone().ok_or(ClientError::ActorNotReady)?;
        let caller = self.caller();
        match call(backend, caller).await {
            Ok(()) => {
                info!(?mutation, "Mutation ok");
                self.cache.apply(mutation);
                Ok(())
            }
            Err(e) => {
                warn!(?mutation, error = %e, "Mutation failed");
                Err(e.into())
            }
        }
    }

    pub async fn save_caller_profile(&mut self, profile: UserProfile) -> Result<(), ClientError> {
        self.mutate(Mutation::SaveCallerProfile, |backend, caller| async move {
            backend.save_caller_user_profile(&caller, profile).await
        })
        .await
    }

    pub async fn update_restaurant_profile(
        &mut self,
        profile: RestaurantProfile,
    ) -> Result<(), ClientError> {
        self.mutate(Mutation::UpdateRestaurantProfile, |backend, caller| async move {
            backend.update_restaurant_profile(&caller, profile).await
        })
        .await
    }

    pub async fn add_category(&mut self, category: MenuCategory) -> Result<(), ClientError> {
        self.mutate(Mutation::AddCategory, |backend, caller| async move {
            backend.add_menu_category(&caller, category).await
        })
        .await
    }

    pub async fn update_category(&mut self, category: MenuCategory) -> Result<(), ClientError> {
        self.mutate(Mutation::UpdateCategory, |backend, caller| async move {
            backend.update_menu_category(&caller, category).await
        })
        .await
    }

    pub async fn delete_category(&mut self, category_id: &str) -> Result<(), ClientError> {
        let category_id = category_id.to_string();
        self.mutate(Mutation::DeleteCategory, |backend, caller| async move {
            backend.delete_menu_category(&caller, &category_id).await
        })
        .await
    }

    pub async fn add_item(&mut self, item: MenuItem) -> Result<(), ClientError> {
        self.mutate(Mutation::AddItem, |backend, caller| async move {
            backend.add_menu_item(&caller, item).await
        })
        .await
    }

    pub async fn update_item(&mut self, item: MenuItem) -> Result<(), ClientError> {
        self.mutate(Mutation::UpdateItem, |backend, caller| async move {
            backend.update_menu_item(&caller, item).await
        })
        .await
    }

    pub async fn delete_item(&mut self, item_id: &str) -> Result<(), ClientError> {
        let item_id = item_id.to_string();
        self.mutate(Mutation::DeleteItem, |backend, caller| async move {
            backend.delete_menu_item(&caller, &item_id).await
        })
        .await
    }

    pub async fn add_image(&mut self, image: GalleryImage) -> Result<(), ClientError> {
        self.mutate(Mutation::AddImage, |backend, caller| async move {
            backend.add_gallery_image(&caller, image).await
        })
        .await
    }

    pub async fn update_image(&mut self, image: GalleryImage) -> Result<(), ClientError> {
        self.mutate(Mutation::UpdateImage, |backend, caller| async move {
            backend.update_gallery_image(&caller, image).await
        })
        .await
    }

    pub async fn delete_image(&mut self, image_id: &str) -> Result<(), ClientError> {
        let image_id = image_id.to_string();
        self.mutate(Mutation::DeleteImage, |backend, caller| async move {
            backend.delete_gallery_image(&caller, &image_id).await
        })
        .await
    }

    pub async fn assign_role(&mut self, user: Principal, role: UserRole) -> Result<(), ClientError> {
        self.mutate(Mutation::AssignRole, |backend, caller| async move {
            backend.assign_caller_user_role(&caller, &user, role).await
        })
        .await
    }
}

fn drop_value<T>(entry: &Result<T, String>) -> Result<(), String> {
    entry.as_ref().map(|_| ()).map_err(Clone::clone)
}
