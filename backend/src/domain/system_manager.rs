//! Access-controlled dispatcher for remote system operations.
//!
//! Start, stop and add resolve the caller through the [`Authenticator`] and
//! then hand the outcome, user or absence, to the [`DataProvider`]. An absent
//! user does not stop the call: the provider is still invoked and its
//! rejection becomes the reported error. Delete skips authentication entirely
//! and acts as the configured service account.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::ports::{Authenticator, DataProvider, DataProviderError, RemoteSystemCommand};
use crate::domain::{
    DEFAULT_SERVICE_ACCOUNT_ID, ManagerResult, Operation, SystemCriteria, SystemManagerError,
    User, UserId,
};

/// Dispatcher implementing [`RemoteSystemCommand`] over injected ports.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use system_manager::domain::ports::RemoteSystemCommand;
/// use system_manager::domain::{SystemManager, UserId};
/// use system_manager::outbound::memory::{InMemoryAuthenticator, InMemoryDataProvider};
///
/// # async fn run() -> Result<(), system_manager::SystemManagerError> {
/// let manager = SystemManager::new(
///     Arc::new(InMemoryAuthenticator::default()),
///     Arc::new(InMemoryDataProvider::default()),
/// );
/// let records = manager
///     .start_remote_system(&UserId::new("1"), Some("12345"))
///     .await?;
/// println!("{records:?}");
/// # Ok(())
/// # }
/// ```
pub struct SystemManager<A, D> {
    authenticator: Arc<A>,
    data_provider: Arc<D>,
    service_account: User,
}

impl<A, D> Clone for SystemManager<A, D> {
    fn clone(&self) -> Self {
        Self {
            authenticator: Arc::clone(&self.authenticator),
            data_provider: Arc::clone(&self.data_provider),
            service_account: self.service_account.clone(),
        }
    }
}

impl<A, D> SystemManager<A, D> {
    /// Create a dispatcher acting as the default service account on delete.
    #[must_use]
    pub fn new(authenticator: Arc<A>, data_provider: Arc<D>) -> Self {
        Self {
            authenticator,
            data_provider,
            service_account: User::service_account(DEFAULT_SERVICE_ACCOUNT_ID),
        }
    }

    /// Replace the identity substituted for the caller on delete.
    #[must_use]
    pub fn with_service_account(mut self, service_account: User) -> Self {
        self.service_account = service_account;
        self
    }

    /// Identity handed to the data provider on delete.
    #[must_use]
    pub fn service_account(&self) -> &User {
        &self.service_account
    }
}

impl<A, D> SystemManager<A, D>
where
    A: Authenticator,
    D: DataProvider,
{
    async fn authenticate(&self, operation: Operation, user_id: &UserId) -> Option<User> {
        let user = self.authenticator.resolve(user_id).await;
        debug!(
            %operation,
            %user_id,
            authenticated = user.is_some(),
            "dispatching remote system operation"
        );
        user
    }

    async fn read_records(
        &self,
        operation: Operation,
        user_id: &UserId,
        system_id: Option<&str>,
    ) -> ManagerResult<Vec<Value>> {
        let user = self.authenticate(operation, user_id).await;
        let criteria = SystemCriteria::for_system(system_id);
        self.data_provider
            .read(user, criteria)
            .await
            .map_err(|err| Self::provider_failure(operation, err))
    }

    fn provider_failure(operation: Operation, error: DataProviderError) -> SystemManagerError {
        warn!(%operation, error = %error, "data provider failed");
        SystemManagerError::provider(operation, error)
    }

    fn ensure_applied(operation: Operation, applied: bool) -> ManagerResult<()> {
        if applied {
            Ok(())
        } else {
            warn!(%operation, "data provider rejected the change");
            Err(SystemManagerError::rejected(operation))
        }
    }
}

#[async_trait]
impl<A, D> RemoteSystemCommand for SystemManager<A, D>
where
    A: Authenticator,
    D: DataProvider,
{
    async fn start_remote_system(
        &self,
        user_id: &UserId,
        system_id: Option<&str>,
    ) -> ManagerResult<Vec<Value>> {
        self.read_records(Operation::Start, user_id, system_id).await
    }

    async fn stop_remote_system(
        &self,
        user_id: &UserId,
        system_id: Option<&str>,
    ) -> ManagerResult<Vec<Value>> {
        self.read_records(Operation::Stop, user_id, system_id).await
    }

    async fn add_remote_system(
        &self,
        user_id: &UserId,
        payload: Vec<Value>,
    ) -> ManagerResult<()> {
        let user = self.authenticate(Operation::Add, user_id).await;
        let applied = self
            .data_provider
            .update(user, payload)
            .await
            .map_err(|err| Self::provider_failure(Operation::Add, err))?;
        Self::ensure_applied(Operation::Add, applied)
    }

    async fn delete_remote_system(
        &self,
        user_id: Option<&UserId>,
        target_id: &str,
    ) -> ManagerResult<()> {
        // The caller identity never reaches the provider.
        debug!(
            operation = %Operation::Delete,
            requested_by = user_id.map(UserId::as_str),
            acting_as = %self.service_account.id(),
            "dispatching remote system operation"
        );
        let applied = self
            .data_provider
            .delete(Some(self.service_account.clone()), target_id.to_owned())
            .await
            .map_err(|err| Self::provider_failure(Operation::Delete, err))?;
        Self::ensure_applied(Operation::Delete, applied)
    }
}
