//! Custom actions for the account actor.
//!
//! Accounts change only through these actions; there is no generic update.

use crate::model::{UserProfile, UserRole};

#[derive(Debug, Clone)]
pub enum AccountAction {
    /// Replaces the caller's profile.
    SaveProfile(UserProfile),
    /// Sets the role the backend reports for this principal.
    AssignRole(UserRole),
}

/// Results from AccountActions - variants match 1:1 with AccountAction
#[derive(Debug, Clone, PartialEq)]
pub enum AccountActionResult {
    SaveProfile(()),
    AssignRole(()),
}
