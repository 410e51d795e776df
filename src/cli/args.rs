//! CLI argument definitions using clap
//!
//! Commands:
//! - draftboard serve [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};

/// draftboard - a minimal, self-hostable project tracker backend
#[derive(Parser, Debug)]
#[command(name = "draftboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the API server
    Serve {
        /// Host to bind to (overrides the config default)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config default)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
