use crate::backend::Backend;
use crate::clients::{AccountClient, CategoryClient, GalleryClient, MenuItemClient, ProfileClient};
use crate::config::SiteConfig;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the restaurant backend.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping every resource actor
/// - **Dependency Wiring**: the category actor gets the item client so deletes cascade
/// - **Seeding**: the default restaurant profile and the configured admins
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::start(&SiteConfig::default());
/// let backend = system.backend();
/// let profile = backend.get_restaurant_profile(&Principal::anonymous()).await?;
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub profile_client: ProfileClient,
    pub category_client: CategoryClient,
    pub item_client: MenuItemClient,
    pub gallery_client: GalleryClient,
    pub account_client: AccountClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Creates every actor, wires dependencies and spawns each actor in its own task.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn start(config: &SiteConfig) -> Self {
        let buffer_size = config.actor.buffer_size;

        // 1. Create actors (no dependencies yet)
        let (profile_actor, profile_client) = crate::profile_actor::new(buffer_size);
        let (category_actor, category_client) = crate::menu_actor::new_categories(buffer_size);
        let (item_actor, item_client) = crate::menu_actor::new_items(buffer_size);
        let (gallery_actor, gallery_client) = crate::gallery_actor::new(buffer_size);
        let (account_actor, account_client) =
            crate::account_actor::new(buffer_size, config.admin_principals());

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(profile_actor.run(())),
            tokio::spawn(item_actor.run(())),
            // Categories delete their items through the item client
            tokio::spawn(category_actor.run(item_client.clone())),
            tokio::spawn(gallery_actor.run(())),
            tokio::spawn(account_actor.run(())),
        ];

        info!(
            buffer_size,
            admins = config.access.admins.len(),
            "Restaurant system started"
        );

        Self {
            profile_client,
            category_client,
            item_client,
            gallery_client,
            account_client,
            handles,
        }
    }

    /// A backend facade over this system's clients.
    pub fn backend(&self) -> Backend {
        Backend::new(
            self.profile_client.clone(),
            self.category_client.clone(),
            self.item_client.clone(),
            self.gallery_client.clone(),
            self.account_client.clone(),
        )
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels once every other clone (including those
    /// held by [`Backend`] values and by the category actor) is gone; each actor then
    /// leaves its loop. The item actor stops last, after the category actor released
    /// its context.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.profile_client);
        drop(self.category_client);
        drop(self.item_client);
        drop(self.gallery_client);
        drop(self.account_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
