//! Command-line front end for the delve treasure search.
//!
//! Run with: `delve <command>`

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Inspect, Solve, Verify};

/// Minimum-move treasure retrieval
#[derive(Parser)]
#[command(name = "delve")]
#[command(about = "Find and check minimum-move treasure routes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Search a dungeon for the shortest treasure route
    Solve(Solve),

    /// Print the rooms, guardians and items of a dungeon
    Inspect(Inspect),

    /// Replay a saved route against a dungeon
    Verify(Verify),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for DELVE_* overrides and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve(cmd) => cmd.execute(),
        Command::Inspect(cmd) => cmd.execute(),
        Command::Verify(cmd) => cmd.execute(),
    }
}
