/// Cache key of one backend read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    CallerProfile,
    CallerRole,
    RestaurantProfile,
    MenuCategories,
    MenuItems,
    GalleryImages,
}

impl QueryKey {
    pub const ALL: [QueryKey; 6] = [
        QueryKey::CallerProfile,
        QueryKey::CallerRole,
        QueryKey::RestaurantProfile,
        QueryKey::MenuCategories,
        QueryKey::MenuItems,
        QueryKey::GalleryImages,
    ];
}

/// A write the query layer can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    SaveCallerProfile,
    UpdateRestaurantProfile,
    AddCategory,
    UpdateCategory,
    DeleteCategory,
    AddItem,
    UpdateItem,
    DeleteItem,
    AddImage,
    UpdateImage,
    DeleteImage,
    AssignRole,
}

impl Mutation {
    /// Keys made stale by a successful mutation.
    ///
    /// Deleting a category also deletes its items in the store, so it drops both lists.
    pub const fn invalidates(self) -> &'static [QueryKey] {
        use QueryKey::*;
        match self {
            Mutation::SaveCallerProfile => &[CallerProfile],
            Mutation::UpdateRestaurantProfile => &[RestaurantProfile],
            Mutation::AddCategory | Mutation::UpdateCategory => &[MenuCategories],
            Mutation::DeleteCategory => &[MenuCategories, MenuItems],
            Mutation::AddItem | Mutation::UpdateItem | Mutation::DeleteItem => &[MenuItems],
            Mutation::AddImage | Mutation::UpdateImage | Mutation::DeleteImage => &[GalleryImages],
            Mutation::AssignRole => &[CallerRole],
        }
    }
}
