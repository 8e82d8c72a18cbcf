use super::{new_id, require, Confirm, CATEGORY_DELETE_PROMPT, ITEM_DELETE_PROMPT};
use crate::model::{MenuCategory, MenuItem};
use crate::query::{ClientError, QueryClient};
use tracing::debug;

/// Add/edit form for a category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    editing: Option<String>,
    pub name: String,
}

impl CategoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(category: &MenuCategory) -> Self {
        Self {
            editing: Some(category.id.clone()),
            name: category.name.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub async fn submit(&mut self, client: &mut QueryClient) -> Result<(), ClientError> {
        require(&self.name, "Category name")?;
        match &self.editing {
            Some(id) => {
                let category = MenuCategory::new(id.clone(), self.name.clone());
                client.update_category(category).await?;
            }
            None => {
                let category = MenuCategory::new(new_id(), self.name.clone());
                client.add_category(category).await?;
            }
        }
        *self = Self::default();
        Ok(())
    }
}

/// Add/edit form for a menu item. `price` holds the raw text as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    editing: Option<String>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: String,
}

impl ItemForm {
    /// Empty form, optionally preselecting a category.
    pub fn new(category_id: Option<&str>) -> Self {
        Self {
            category_id: category_id.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn edit(item: &MenuItem) -> Self {
        Self {
            editing: Some(item.id.clone()),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            category_id: item.category_id.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Empty or unparseable text means no price.
    fn parse_price(&self) -> Result<f64, ClientError> {
        let price = self.price.trim().parse::<f64>().unwrap_or(0.0);
        if !price.is_finite() || price < 0.0 {
            return Err(ClientError::Validation(format!(
                "Price must be a non-negative number: {}",
                self.price
            )));
        }
        Ok(price)
    }

    pub async fn submit(&mut self, client: &mut QueryClient) -> Result<(), ClientError> {
        require(&self.name, "Item name")?;
        require(&self.category_id, "Category")?;
        let price = self.parse_price()?;
        let id = self.editing.clone().unwrap_or_else(new_id);
        let item = MenuItem::new(
            id,
            self.category_id.clone(),
            self.name.clone(),
            self.description.clone(),
            price,
        );
        if self.is_edit() {
            client.update_item(item).await?;
        } else {
            client.add_item(item).await?;
        }
        *self = Self::default();
        Ok(())
    }
}

/// Returns whether the deletion was sent.
pub async fn delete_category(
    client: &mut QueryClient,
    confirm: &mut impl Confirm,
    category_id: &str,
) -> Result<bool, ClientError> {
    if !confirm.confirm(CATEGORY_DELETE_PROMPT) {
        debug!(category_id, "Category deletion declined");
        return Ok(false);
    }
    client.delete_category(category_id).await?;
    Ok(true)
}

pub async fn delete_item(
    client: &mut QueryClient,
    confirm: &mut impl Confirm,
    item_id: &str,
) -> Result<bool, ClientError> {
    if !confirm.confirm(ITEM_DELETE_PROMPT) {
        debug!(item_id, "Item deletion declined");
        return Ok(false);
    }
    client.delete_item(item_id).await?;
    Ok(true)
}

/// A category as the menu editor lists it.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListing {
    pub category: MenuCategory,
    pub items: Vec<MenuItem>,
}

/// Every stored category in store order, each with its items. Nothing is hidden here.
pub fn menu_listing(categories: &[MenuCategory], items: &[MenuItem]) -> Vec<CategoryListing> {
    categories
        .iter()
        .map(|category| CategoryListing {
            category: category.clone(),
            items: items
                .iter()
                .filter(|item| item.category_id == category.id)
                .cloned()
                .collect(),
        })
        .collect()
}
