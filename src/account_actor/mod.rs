//! Per-caller accounts: the saved user profile and any assigned role.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::{Account, AccountCreate};
pub use error::*;

use crate::clients::AccountClient;
use crate::model::{Principal, UserRole};
use actor_framework::ResourceActor;

/// Creates the account actor, with `admins` already holding the admin role.
pub fn new(
    buffer_size: usize,
    admins: impl IntoIterator<Item = Principal>,
) -> (ResourceActor<Account>, AccountClient) {
    let seed = admins.into_iter().map(|principal| {
        let account = Account {
            principal: principal.clone(),
            role: Some(UserRole::Admin),
            profile: None,
        };
        (principal, account)
    });
    let (actor, generic_client) = ResourceActor::with_entries(buffer_size, seed);
    (actor, AccountClient::new(generic_client))
}
