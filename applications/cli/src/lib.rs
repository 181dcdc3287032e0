//! Tilawa CLI
//!
//! Library half of the `tilawa` binary: configuration, command
//! implementations and the dry-run audio backend used by `tilawa recite`.

pub mod commands;
pub mod config;
pub mod dry_run;
pub mod error;

pub use config::TilawaConfig;
pub use dry_run::DryRunBackend;
pub use error::{CliError, Result};
