pub const CATEGORY_DELETE_PROMPT: &str =
    "Delete this category? All items in it will also be deleted.";
pub const ITEM_DELETE_PROMPT: &str = "Delete this item?";
pub const IMAGE_DELETE_PROMPT: &str = "Delete this image metadata?";

/// Synchronous yes/no prompt shown before a deletion.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

