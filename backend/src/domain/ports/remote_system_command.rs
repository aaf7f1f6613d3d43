//! Driving port for remote system operations.
//!
//! Inbound adapters call this port to start, stop, add, or delete remote
//! systems without knowing which authentication store or data store backs
//! the dispatcher.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ManagerResult, UserId};

/// Domain use-case port for remote system operations.
#[async_trait]
pub trait RemoteSystemCommand: Send + Sync {
    /// Start the remote system `system_id` on behalf of `user_id`, returning
    /// the records reported by the store.
    async fn start_remote_system(
        &self,
        user_id: &UserId,
        system_id: Option<&str>,
    ) -> ManagerResult<Vec<Value>>;

    /// Stop the remote system `system_id` on behalf of `user_id`, returning
    /// the records reported by the store.
    async fn stop_remote_system(
        &self,
        user_id: &UserId,
        system_id: Option<&str>,
    ) -> ManagerResult<Vec<Value>>;

    /// Register a remote system described by `payload`.
    async fn add_remote_system(
        &self,
        user_id: &UserId,
        payload: Vec<Value>,
    ) -> ManagerResult<()>;

    /// Remove the remote system `target_id`.
    ///
    /// The caller identity is ignored; the store sees the dispatcher's
    /// service account instead.
    async fn delete_remote_system(
        &self,
        user_id: Option<&UserId>,
        target_id: &str,
    ) -> ManagerResult<()>;
}
