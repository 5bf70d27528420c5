//! hazatlas - hazard catalog harvester and report service

use clap::Parser;
use color_eyre::eyre::Result;
use hazatlas::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(cmd) => cmd.run().await,
        Command::Harvest(cmd) => cmd.run().await,
    }
}
