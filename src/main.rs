//! # Restaurant Site Demo
//!
//! Starts the backend actors, drives the site as a signed-in admin and logs what the
//! public page would show.
//!
//! ```bash
//! SITE_ACCESS_ADMINS=aaaaa-aa RUST_LOG=info cargo run
//! SITE_CONFIG=site.toml RUST_LOG=debug cargo run
//! ```

use restaurant_site::admin::{CategoryForm, ItemForm};
use restaurant_site::config::SiteConfig;
use restaurant_site::lifecycle::{setup_tracing, RestaurantSystem};
use restaurant_site::query::ClientError;
use restaurant_site::site::Site;
use std::path::PathBuf;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::var_os("SITE_CONFIG") {
        Some(path) => SiteConfig::load(&PathBuf::from(path)),
        None => SiteConfig::from_env(),
    }
    .map_err(|e| e.to_string())?;

    info!("Starting restaurant site");
    let system = RestaurantSystem::start(&config);

    let mut site = Site::new(&config);
    site.attach(system.backend());

    match config.admin_principals().into_iter().next() {
        Some(admin) => {
            site.sign_in(admin);
            let span = tracing::info_span!("menu_seeding");
            async {
                let mut category = CategoryForm::new();
                category.name = "KARAHI SPECIALS".to_string();
                category.submit(site.client()).await?;

                let categories = site.client().menu_categories().await;
                let Some(created) = categories.ready().and_then(|c| c.last().cloned()) else {
                    return Ok(());
                };
                let mut item = ItemForm::new(Some(created.id.as_str()));
                item.name = "Shinwari Karahi".to_string();
                item.description = "Lamb cooked with tomatoes, green chillies and salt".to_string();
                item.price = "1800".to_string();
                item.submit(site.client()).await?;
                Ok::<_, ClientError>(())
            }
            .instrument(span)
            .await
            .map_err(|e| e.to_string())?;
        }
        None => warn!("No admins configured; showing the public page only"),
    }

    let page = site.render().await;
    info!(
        name = %page.overview.name,
        location = %page.location.address,
        categories = page.menu.groups().len(),
        items = page.menu.item_count(),
        images = page.gallery.images().len(),
        nav = page.nav.len(),
        "Public page rendered"
    );
    for group in page.menu.groups() {
        info!(category = %group.category.name, items = group.items.len(), "Menu category");
    }

    // Every backend handle has to be gone before the actors can stop
    drop(site);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
