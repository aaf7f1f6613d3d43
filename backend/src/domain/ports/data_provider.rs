//! Driven port for the remote system data store.
//!
//! Records are carried as [`serde_json::Value`] items so providers can return
//! flat or nested collections without the dispatcher reshaping them.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{SystemCriteria, User};

use super::define_port_error;

define_port_error! {
    /// Errors raised by data provider adapters.
    pub enum DataProviderError {
        /// The store does not support the requested call, for example when no
        /// authenticated user accompanies it.
        OperationNotSupported => "data provider operation not supported: {message}",
        /// Store connection could not be established.
        Connection => "data provider connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "data provider query failed: {message}",
    }
}

/// Port for reading and mutating remote system records.
///
/// Every call receives the user resolved by the authenticator, or `None` when
/// resolution found no valid user. Rejecting unauthenticated calls is the
/// store's responsibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetch the records matching `criteria`.
    async fn read(
        &self,
        user: Option<User>,
        criteria: SystemCriteria,
    ) -> Result<Vec<Value>, DataProviderError>;

    /// Store `payload`; returns `false` when the store declines it.
    async fn update(
        &self,
        user: Option<User>,
        payload: Vec<Value>,
    ) -> Result<bool, DataProviderError>;

    /// Remove the record identified by `target_id`; returns `false` when
    /// nothing was removed.
    async fn delete(
        &self,
        user: Option<User>,
        target_id: String,
    ) -> Result<bool, DataProviderError>;
}
