//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local authentication and remote system stores,
//!   seeded from JSON fixture files.
//!
//! Adapters are thin translators between domain types and their backing
//! storage. Sequencing and error translation stay in the domain.

pub mod memory;
