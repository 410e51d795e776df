//! CLI module for draftboard
//!
//! Provides the command-line interface:
//! - serve: open the store, bind the HTTP server, run until interrupted

mod args;

pub use args::{Cli, Command};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::DocumentStore;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors; all of them are fatal
#[derive(Debug, Error)]
pub enum CliError {
    /// Runtime construction or server I/O failure
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { host, port } => serve(host, port),
    }
}

fn serve(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    init_tracing();

    let mut config = HttpServerConfig::default();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let store = DocumentStore::open();
    let server = HttpServer::with_config(config, store);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
