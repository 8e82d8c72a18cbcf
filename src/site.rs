//! # Site Shell
//!
//! [`Site`] is the single owner of the [`QueryClient`] and the navigation state. Each
//! `*_view` method reads through the cache and hands the result to the matching
//! builder in [`view`](crate::view).

use crate::admin::AdminTab;
use crate::backend::Backend;
use crate::config::SiteConfig;
use crate::model::{Principal, UserProfile};
use crate::query::{ClientError, QueryClient, QueryStatus};
use crate::view::{
    nav_items, AdminGate, ContactView, GalleryView, GateView, LocationView, MenuView, NavItem,
    OverviewView, Section,
};
use tracing::{debug, instrument};

/// Everything the public page shows at once.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicPage {
    pub nav: Vec<NavItem>,
    pub overview: OverviewView,
    pub menu: MenuView,
    pub gallery: GalleryView,
    pub location: LocationView,
    pub contact: ContactView,
    pub profile_setup: bool,
}

pub struct Site {
    client: QueryClient,
    public_path: String,
    pub section: Section,
    pub admin_tab: AdminTab,
    pub search: String,
}

impl Site {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            client: QueryClient::new(config.query.retries),
            public_path: config.assets.public_path.clone(),
            section: Section::default(),
            admin_tab: AdminTab::default(),
            search: String::new(),
        }
    }

    pub fn attach(&mut self, backend: Backend) {
        self.client.attach(backend);
    }

    pub fn client(&mut self) -> &mut QueryClient {
        &mut self.client
    }

    pub fn identity(&self) -> Option<&Principal> {
        self.client.identity()
    }

    pub fn sign_in(&mut self, principal: Principal) {
        self.client.sign_in(principal);
    }

    pub fn sign_out(&mut self) {
        self.client.sign_out();
        self.section = Section::default();
    }

    pub fn navigate(&mut self, section: Section) {
        debug!(section = section.label(), "Navigate");
        self.section = section;
    }

    /// Full reload: every cached read is fetched again and navigation resets.
    pub fn reload(&mut self) {
        self.client.reload();
        self.section = Section::default();
        self.admin_tab = AdminTab::default();
    }

    pub async fn nav(&mut self) -> Vec<NavItem> {
        let role = if self.client.identity().is_some() {
            self.client.caller_role().await
        } else {
            QueryStatus::Disabled
        };
        nav_items(self.section, self.client.identity(), &role)
    }

    pub async fn admin_gate(&mut self) -> GateView {
        let role = self.client.caller_role().await;
        AdminGate::evaluate(self.client.identity(), &role)
    }

    /// Whether a signed-in caller still has to pick a display name.
    pub async fn needs_profile_setup(&mut self) -> bool {
        if self.client.identity().is_none() {
            return false;
        }
        matches!(self.client.caller_profile().await, QueryStatus::Ready(None))
    }

    pub async fn complete_profile_setup(&mut self, name: &str) -> Result<(), ClientError> {
        if name.trim().is_empty() {
            return Err(ClientError::Validation("Name is required".to_string()));
        }
        self.client
            .save_caller_profile(UserProfile {
                name: name.trim().to_string(),
            })
            .await
    }

    pub async fn overview_view(&mut self) -> OverviewView {
        let profile = self.client.restaurant_profile().await;
        OverviewView::build(profile.ready())
    }

    pub async fn location_view(&mut self) -> LocationView {
        let profile = self.client.restaurant_profile().await;
        LocationView::build(profile.ready())
    }

    pub async fn contact_view(&mut self) -> ContactView {
        let profile = self.client.restaurant_profile().await;
        ContactView::build(profile.ready())
    }

    pub async fn menu_view(&mut self) -> MenuView {
        let categories = self.client.menu_categories().await;
        let items = self.client.menu_items().await;
        MenuView::build(&categories, &items, &self.search)
    }

    pub async fn gallery_view(&mut self) -> GalleryView {
        let images = self.client.gallery_images().await;
        GalleryView::build(&images, &self.public_path)
    }

    #[instrument(skip(self))]
    pub async fn render(&mut self) -> PublicPage {
        PublicPage {
            nav: self.nav().await,
            overview: self.overview_view().await,
            menu: self.menu_view().await,
            gallery: self.gallery_view().await,
            location: self.location_view().await,
            contact: self.contact_view().await,
            profile_setup: self.needs_profile_setup().await,
        }
    }
}
