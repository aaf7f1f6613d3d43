//! Driven port resolving user identifiers to user records.

use async_trait::async_trait;

use crate::domain::{User, UserId};

/// Port for the authentication store.
///
/// Resolution never fails: an unknown or invalid identifier yields `None`,
/// which callers treat as a normal value rather than an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolve `user_id` to the matching user, or `None` when no valid user
    /// exists.
    async fn resolve(&self, user_id: &UserId) -> Option<User>;
}
