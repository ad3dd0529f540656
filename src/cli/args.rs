//! CLI argument definitions using clap
//!
//! Commands:
//! - library-rest init --config <path>
//! - library-rest serve --config <path> [--port <port>] [--seed]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Library catalog REST service
#[derive(Parser, Debug)]
#[command(name = "library-rest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./library.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file. Defaults apply if it does not exist.
        #[arg(long, default_value = "./library.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Load the sample authors and books before serving
        #[arg(long)]
        seed: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
