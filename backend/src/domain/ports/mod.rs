//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod authenticator;
mod data_provider;
mod remote_system_command;

#[cfg(test)]
pub(crate) use authenticator::MockAuthenticator;
pub use authenticator::Authenticator;
#[cfg(test)]
pub(crate) use data_provider::MockDataProvider;
pub use data_provider::{DataProvider, DataProviderError};
pub use remote_system_command::RemoteSystemCommand;
