//! Inbound adapters driving the domain ports.
//!
//! - **cli**: command-line surface for the remote system dispatcher.

pub mod cli;
