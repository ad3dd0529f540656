//! CLI module
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - serve: Load configuration and run the HTTP server

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{boot_catalog, init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
