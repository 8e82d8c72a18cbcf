//! # Admin Panel
//!
//! Editors for the restaurant profile, the menu and the gallery. Every editor keeps
//! local form state and submits through the [`QueryClient`](crate::query::QueryClient),
//! so a successful save invalidates exactly the reads it affects. A form is cleared only
//! after the backend accepted it.
//!
//! Deletions ask a [`Confirm`] prompt first and do nothing when it declines.

mod confirm;
mod gallery_editor;
mod menu_editor;
mod profile_editor;

pub use confirm::{Confirm, CATEGORY_DELETE_PROMPT, IMAGE_DELETE_PROMPT, ITEM_DELETE_PROMPT};
pub use gallery_editor::{delete_image, ImageForm};
pub use menu_editor::{delete_category, delete_item, menu_listing, CategoryForm, CategoryListing, ItemForm};
pub use profile_editor::ProfileForm;

use crate::query::ClientError;
use uuid::Uuid;

/// Tabs of the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Profile,
    Menu,
    Gallery,
}

impl AdminTab {
    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Profile => "Profile",
            AdminTab::Menu => "Menu",
            AdminTab::Gallery => "Gallery",
        }
    }
}

/// Identifier for a record created from the admin panel.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn require(value: &str, field: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_distinct_uuids() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("Kheer", "name").is_ok());
        assert_eq!(
            require("  ", "name"),
            Err(ClientError::Validation("name is required".to_string()))
        );
    }

    #[test]
    fn test_profile_is_the_default_tab() {
        assert_eq!(AdminTab::default(), AdminTab::Profile);
        assert_eq!(AdminTab::Gallery.label(), "Gallery");
    }
}
