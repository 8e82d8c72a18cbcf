//! The [`Account`] record and its [`ActorEntity`] implementation.

use super::{AccountAction, AccountActionResult, AccountError};
use crate::model::{Principal, UserProfile, UserRole};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

/// What the backend remembers about one principal.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub principal: Principal,
    /// Role set by an admin (or seeded from config). `None` means the default role.
    pub role: Option<UserRole>,
    pub profile: Option<UserProfile>,
}

impl Account {
    /// The role reported for this account: the assigned one, else `User`.
    pub fn effective_role(&self) -> UserRole {
        self.role.unwrap_or(UserRole::User)
    }
}

/// Payload for creating an account.
#[derive(Debug, Clone, Default)]
pub struct AccountCreate {
    pub role: Option<UserRole>,
    pub profile: Option<UserProfile>,
}

#[async_trait]
impl ActorEntity for Account {
    type Id = Principal;
    type Create = AccountCreate;
    type Update = Infallible;
    type Query = ();
    type Action = AccountAction;
    type ActionResult = AccountActionResult;
    type Context = ();
    type Error = AccountError;

    fn from_create_params(principal: Principal, params: AccountCreate) -> Result<Self, Self::Error> {
        if principal.is_anonymous() {
            return Err(AccountError::Anonymous);
        }
        Ok(Self {
            principal,
            role: params.role,
            profile: params.profile,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &Self::Context) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: AccountAction,
        _ctx: &Self::Context,
    ) -> Result<AccountActionResult, Self::Error> {
        match action {
            AccountAction::SaveProfile(profile) => {
                self.profile = Some(profile);
                Ok(AccountActionResult::SaveProfile(()))
            }
            AccountAction::AssignRole(role) => {
                self.role = Some(role);
                Ok(AccountActionResult::AssignRole(()))
            }
        }
    }
}
