//! In-memory adapters for the authentication and remote system stores.
//!
//! These adapters back the command-line binary and behaviour tests. State
//! lives behind `RwLock`s so a single instance can be shared through `Arc`
//! by concurrent callers. Poisoned locks are recovered.

mod authenticator;
mod data_provider;
mod fixtures;

pub use authenticator::InMemoryAuthenticator;
pub use data_provider::InMemoryDataProvider;
pub use fixtures::{FixtureLoadError, FixtureSnapshot};
