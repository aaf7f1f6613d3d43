//! Error taxonomy surfaced by the remote system dispatcher.
//!
//! Every failure of a dispatcher operation is reported as a
//! [`SystemManagerError`], whatever the collaborator that caused it. Adapters
//! translate it into their own transport representation.

use std::fmt;

use thiserror::Error;

use crate::domain::ports::DataProviderError;

/// Dispatcher operation that produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Start a remote system.
    Start,
    /// Stop a remote system.
    Stop,
    /// Register a remote system.
    Add,
    /// Remove a remote system.
    Delete,
}

impl Operation {
    /// Stable lowercase name used in messages and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Add => "add",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single error kind returned by dispatcher operations.
///
/// An absent user is never reported here directly; it only surfaces when the
/// data provider rejects the call that carried it.
///
/// # Examples
/// ```
/// use system_manager::domain::{Operation, SystemManagerError};
///
/// let err = SystemManagerError::rejected(Operation::Add);
/// assert_eq!(err.operation(), Operation::Add);
/// assert_eq!(err.to_string(), "remote system add was rejected by the data provider");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SystemManagerError {
    /// The data provider failed while serving the operation.
    #[error("remote system {operation} failed: {source}")]
    Provider {
        /// Operation being dispatched.
        operation: Operation,
        /// Underlying provider failure.
        #[source]
        source: DataProviderError,
    },
    /// The data provider reported that it did not apply the change.
    #[error("remote system {operation} was rejected by the data provider")]
    Rejected {
        /// Operation being dispatched.
        operation: Operation,
    },
}

impl SystemManagerError {
    /// Wrap a provider failure raised during `operation`.
    #[must_use]
    pub fn provider(operation: Operation, source: DataProviderError) -> Self {
        Self::Provider { operation, source }
    }

    /// Report that the provider declined `operation`.
    #[must_use]
    pub fn rejected(operation: Operation) -> Self {
        Self::Rejected { operation }
    }

    /// Operation that failed.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::Provider { operation, .. } | Self::Rejected { operation } => *operation,
        }
    }
}
