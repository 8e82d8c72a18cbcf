use crate::account_actor::{Account, AccountAction, AccountActionResult, AccountCreate, AccountError};
use crate::model::{Principal, UserProfile, UserRole};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the account actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        AccountError::from(e)
    }
}

impl AccountClient {
    /// Role of `principal`: `Guest` when anonymous, the assigned role if any, else `User`.
    #[instrument(skip(self))]
    pub async fn role_of(&self, principal: &Principal) -> Result<UserRole, AccountError> {
        if principal.is_anonymous() {
            return Ok(UserRole::Guest);
        }
        let account = self.get(principal.clone()).await?;
        Ok(account.map_or(UserRole::User, |a| a.effective_role()))
    }

    /// Saved profile of `principal`, `None` when there is none.
    #[instrument(skip(self))]
    pub async fn profile_of(&self, principal: &Principal) -> Result<Option<UserProfile>, AccountError> {
        if principal.is_anonymous() {
            return Ok(None);
        }
        let account = self.get(principal.clone()).await?;
        Ok(account.and_then(|a| a.profile))
    }

    #[instrument(skip(self))]
    pub async fn save_profile(
        &self,
        principal: Principal,
        profile: UserProfile,
    ) -> Result<(), AccountError> {
        self.upsert(principal, AccountAction::SaveProfile(profile))
            .await
            .map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn assign_role(&self, principal: Principal, role: UserRole) -> Result<(), AccountError> {
        self.upsert(principal, AccountAction::AssignRole(role))
            .await
            .map(|_| ())
    }

    /// Applies `action` to the account, creating the account first if it is missing.
    async fn upsert(
        &self,
        principal: Principal,
        action: AccountAction,
    ) -> Result<AccountActionResult, AccountError> {
        debug!(?action, "Sending request");
        match self
            .inner
            .perform_action(principal.clone(), action.clone())
            .await
        {
            Err(FrameworkError::NotFound(_)) => {}
            answered => return answered.map_err(Self::map_error),
        }

        let (params, result) = match &action {
            AccountAction::SaveProfile(profile) => (
                AccountCreate {
                    role: None,
                    profile: Some(profile.clone()),
                },
                AccountActionResult::SaveProfile(()),
            ),
            AccountAction::AssignRole(role) => (
                AccountCreate {
                    role: Some(*role),
                    profile: None,
                },
                AccountActionResult::AssignRole(()),
            ),
        };
        match self.inner.create(principal.clone(), params).await {
            Ok(_) => Ok(result),
            // Created by someone else between the two requests.
            Err(FrameworkError::AlreadyExists(_)) => self
                .inner
                .perform_action(principal, action)
                .await
                .map_err(Self::map_error),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
