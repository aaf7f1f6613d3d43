//! Domain primitives, ports and the remote system dispatcher.
//!
//! Purpose: Define the types exchanged with the authentication store and the
//! remote system data store, and the service that sequences calls to them.
//! Keep types immutable and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - User / UserId — identity resolved by the authenticator.
//! - SystemCriteria — read predicate handed to the data provider.
//! - SystemManager — access-controlled dispatcher over the ports.
//! - SystemManagerError / Operation — the single reported error kind.

pub mod criteria;
pub mod error;
pub mod ports;
pub mod system_manager;
pub mod user;

pub use self::criteria::SystemCriteria;
pub use self::error::{Operation, SystemManagerError};
pub use self::system_manager::SystemManager;
pub use self::user::{DEFAULT_SERVICE_ACCOUNT_ID, User, UserId};

/// Convenient result alias for dispatcher operations.
///
/// # Examples
/// ```
/// use system_manager::domain::{ManagerResult, Operation, SystemManagerError};
///
/// fn refuse() -> ManagerResult<()> {
///     Err(SystemManagerError::rejected(Operation::Delete))
/// }
/// assert!(refuse().is_err());
/// ```
pub type ManagerResult<T> = Result<T, SystemManagerError>;
