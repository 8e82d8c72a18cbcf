//! The public menu: exclusion, seed fallback, search and grouping.

use super::seed::{seed_categories, seed_items};
use crate::model::{MenuCategory, MenuItem};
use crate::query::QueryStatus;
use std::collections::HashSet;

/// Category name (compared upper-cased) that is never shown on the public menu.
pub const EXCLUDED_CATEGORY: &str = "BREAKFAST";

const NO_MATCHES: &str = "No items found matching your search.";
const COMING_SOON: &str = "Menu coming soon!";

/// One rendered category with its visible items.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: MenuCategory,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuView {
    Loading,
    /// A search is active and nothing matched.
    NoMatches,
    /// No search and nothing to show.
    ComingSoon,
    Categories(Vec<CategoryGroup>),
}

fn is_excluded(category: &MenuCategory) -> bool {
    category.name.to_uppercase() == EXCLUDED_CATEGORY
}

fn excluded_ids(categories: &[MenuCategory]) -> HashSet<String> {
    categories
        .iter()
        .filter(|c| is_excluded(c))
        .map(|c| c.id.clone())
        .collect()
}

fn loaded<T: Clone>(status: &QueryStatus<Vec<T>>) -> Vec<T> {
    status.ready().cloned().unwrap_or_default()
}

impl MenuView {
    /// Builds the public menu from the category and item reads.
    ///
    /// External data wins whenever, after removing the excluded category and its
    /// items, anything is left; otherwise the seed catalog is used. Categories and
    /// items fall back independently.
    pub fn build(
        categories: &QueryStatus<Vec<MenuCategory>>,
        items: &QueryStatus<Vec<MenuItem>>,
        search: &str,
    ) -> Self {
        if categories.is_pending() || items.is_pending() {
            return MenuView::Loading;
        }

        let external_categories = loaded(categories);
        let mut hidden = excluded_ids(&external_categories);

        let visible_categories: Vec<MenuCategory> = external_categories
            .into_iter()
            .filter(|c| !is_excluded(c))
            .collect();
        let visible_items: Vec<MenuItem> = loaded(items)
            .into_iter()
            .filter(|i| !hidden.contains(&i.category_id))
            .collect();

        let chosen_categories = if visible_categories.is_empty() {
            seed_categories()
        } else {
            visible_categories
        };
        let chosen_items = if visible_items.is_empty() {
            seed_items()
        } else {
            visible_items
        };

        // The fallback sources carry the excluded category too.
        hidden.extend(excluded_ids(&chosen_categories));
        let query = search.to_lowercase();
        let shown: Vec<MenuItem> = chosen_items
            .into_iter()
            .filter(|i| !hidden.contains(&i.category_id))
            .filter(|i| {
                search.trim().is_empty()
                    || i.name.to_lowercase().contains(&query)
                    || i.description.to_lowercase().contains(&query)
            })
            .collect();

        let groups: Vec<CategoryGroup> = chosen_categories
            .into_iter()
            .filter(|c| !is_excluded(c))
            .filter_map(|category| {
                let items: Vec<MenuItem> = shown
                    .iter()
                    .filter(|i| i.category_id == category.id)
                    .cloned()
                    .collect();
                (!items.is_empty()).then_some(CategoryGroup { category, items })
            })
            .collect();

        if !groups.is_empty() {
            MenuView::Categories(groups)
        } else if !search.is_empty() {
            MenuView::NoMatches
        } else {
            MenuView::ComingSoon
        }
    }

    /// Text shown in place of the menu, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            MenuView::NoMatches => Some(NO_MATCHES),
            MenuView::ComingSoon => Some(COMING_SOON),
            MenuView::Loading | MenuView::Categories(_) => None,
        }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        match self {
            MenuView::Categories(groups) => groups,
            _ => &[],
        }
    }

    pub fn item_count(&self) -> usize {
        self.groups().iter().map(|g| g.items.len()).sum()
    }
}
