use serde::{Deserialize, Serialize};

/// A named group of menu items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
}

impl MenuCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A dish on the menu.
///
/// `price` is never negative; `0` means the price is not shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        category_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    /// Display text for the price, hidden when no price is set.
    pub fn price_label(&self) -> Option<String> {
        if self.price > 0.0 {
            Some(format!("Rs. {:.0}", self.price))
        } else {
            None
        }
    }
}

/// Payload for creating a category.
#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
}

/// Payload for updating a category.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub name: Option<String>,
}

/// Payload for creating a menu item.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Payload for updating a menu item. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct MenuItemUpdate {
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl From<MenuCategory> for CategoryCreate {
    fn from(category: MenuCategory) -> Self {
        Self {
            name: category.name,
        }
    }
}

impl From<MenuCategory> for CategoryUpdate {
    fn from(category: MenuCategory) -> Self {
        Self {
            name: Some(category.name),
        }
    }
}

impl From<MenuItem> for MenuItemCreate {
    fn from(item: MenuItem) -> Self {
        Self {
            category_id: item.category_id,
            name: item.name,
            description: item.description,
            price: item.price,
        }
    }
}

impl From<MenuItem> for MenuItemUpdate {
    fn from(item: MenuItem) -> Self {
        Self {
            category_id: Some(item.category_id),
            name: Some(item.name),
            description: Some(item.description),
            price: Some(item.price),
        }
    }
}

/// Selection for item listings.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemQuery {
    #[default]
    All,
    Category(String),
}
