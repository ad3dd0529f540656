//! CLI command implementations

use std::path::Path;

use crate::catalog::{sample_data, Catalog};
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::storage::MemoryStore;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port, seed } => serve(&config, port, seed),
    }
}

/// Write the default configuration to `config_path`
pub fn init(config_path: &Path) -> CliResult<()> {
    Config::default().write_new(config_path)?;
    log_event_with_fields(
        Event::ConfigWritten,
        &[("path", &config_path.display().to_string())],
    );
    Ok(())
}

/// Build the catalog described by `config`, seeding it when asked
pub fn boot_catalog(config: &Config) -> CliResult<Catalog<MemoryStore>> {
    let catalog = Catalog::new(MemoryStore::new());
    if config.seed_sample_data {
        let counts = sample_data::load(&catalog)?;
        log_event_with_fields(
            Event::SampleDataLoaded,
            &[
                ("authors", &counts.authors.to_string()),
                ("books", &counts.books.to_string()),
            ],
        );
    }
    Ok(catalog)
}

/// Load configuration, build the catalog and serve HTTP until ctrl-c
pub fn serve(config_path: &Path, port: Option<u16>, seed: bool) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = Config::load_or_default(config_path).map_err(boot_failure)?;
    if let Some(port) = port {
        config.http.port = port;
    }
    if seed {
        config.seed_sample_data = true;
    }
    config.validate().map_err(boot_failure)?;
    Logger::set_min_severity(config.severity()?);

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("path", &config_path.display().to_string()),
            ("port", &config.http.port.to_string()),
        ],
    );

    let catalog = boot_catalog(&config).map_err(boot_failure)?;
    let server = HttpServer::new(config.http, catalog);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
    .map_err(boot_failure)
}

fn boot_failure(err: CliError) -> CliError {
    log_event_with_fields(
        Event::BootFailed,
        &[("code", err.code_str()), ("error", err.message())],
    );
    err
}
