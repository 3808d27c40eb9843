//! Noughts - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{AppConfig, Cli, Command, PlayOptions, init_stderr_tracing, run_tui, simulate};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            cross,
            nought,
            config,
            seed,
            log_file,
        } => {
            let config = AppConfig::load(config.as_deref()).context("Failed to load configuration")?;
            run_tui(PlayOptions::new(config, cross, nought, seed, log_file)).await
        }
        Command::Simulate {
            cross,
            nought,
            matches,
            config,
            seed,
            json,
        } => {
            init_stderr_tracing();
            let config = AppConfig::load(config.as_deref()).context("Failed to load configuration")?;
            info!(%cross, %nought, matches, "Running simulation");
            let summary = simulate(&config, cross, nought, matches, seed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary);
            }
            Ok(())
        }
    }
}
