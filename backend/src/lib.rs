//! Access-controlled dispatcher for remote system operations.
//!
//! The crate is laid out as a small hexagon: [`domain`] owns the value types,
//! the dispatcher service and its ports, [`outbound`] provides in-memory
//! driven adapters, and [`inbound`] exposes the command-line driving adapter.
//! Layered settings live in [`config`].

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::{SystemManager, SystemManagerError};
