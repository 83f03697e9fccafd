//! Command-line interface wiring for econ-pulse.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod serve;
pub mod snapshot;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Economic indicators and market news server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Snapshot(args) => snapshot::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server.
    Serve(serve::Args),
    /// Fetch indicators once and print them as JSON.
    Snapshot(snapshot::Args),
}
