use crate::model::{Principal, UserRole};
use crate::query::QueryStatus;

/// A section of the single-page site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Overview,
    Menu,
    Gallery,
    Location,
    Contact,
    Admin,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Menu,
        Section::Gallery,
        Section::Location,
        Section::Contact,
        Section::Admin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Home",
            Section::Menu => "Menu",
            Section::Gallery => "Gallery",
            Section::Location => "Location",
            Section::Contact => "Contact",
            Section::Admin => "Admin",
        }
    }

    pub fn admin_only(self) -> bool {
        matches!(self, Section::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

/// Navigation entries visible to the caller. Admin needs an identity with the admin role.
pub fn nav_items(
    active: Section,
    identity: Option<&Principal>,
    role: &QueryStatus<UserRole>,
) -> Vec<NavItem> {
    let is_admin = identity.is_some() && matches!(role, QueryStatus::Ready(UserRole::Admin));
    Section::ALL
        .into_iter()
        .filter(|section| !section.admin_only() || is_admin)
        .map(|section| NavItem {
            section,
            label: section.label(),
            active: section == active,
        })
        .collect()
}
