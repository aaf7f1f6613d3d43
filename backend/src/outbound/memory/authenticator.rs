//! Authenticator backed by a process-local user table.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::Authenticator;
use crate::domain::{User, UserId};

/// Authenticator resolving users from an in-memory table.
#[derive(Debug, Default)]
pub struct InMemoryAuthenticator {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryAuthenticator {
    /// Build an authenticator knowing the given users.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let table = users
            .into_iter()
            .map(|user| (user.id().clone(), user))
            .collect();
        Self {
            users: RwLock::new(table),
        }
    }

    /// Register or replace a user.
    pub fn insert(&self, user: User) {
        let mut guard = self.users.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(user.id().clone(), user);
    }

    /// Number of known users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no users are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Authenticator for InMemoryAuthenticator {
    async fn resolve(&self, user_id: &UserId) -> Option<User> {
        let guard = self.users.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(user_id).cloned()
    }
}
