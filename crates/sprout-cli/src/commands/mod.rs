//! Command handlers.
//!
//! Each submodule implements one subcommand: translate CLI arguments into
//! core types, call the application service, display results. No business
//! logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod new;
pub mod preview;
