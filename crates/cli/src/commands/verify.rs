//! Replay a saved route against a dungeon.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};

use delve_content::DungeonLoader;
use delve_core::{EngineError, Route, replay};

use crate::config::{EnvOverrides, load_search_config};

/// Replay a saved route against a dungeon
#[derive(Parser)]
pub struct Verify {
    /// Dungeon file (RON)
    #[arg(value_name = "DUNGEON")]
    dungeon: PathBuf,

    /// Route file (JSON, as written by `delve solve --save-route`)
    #[arg(value_name = "ROUTE")]
    route: PathBuf,

    /// Search configuration (TOML); must match the one used to solve
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Verify {
    pub fn execute(self) -> Result<()> {
        let config = load_search_config(self.config.as_deref(), &EnvOverrides::from_env())?;
        let loaded = DungeonLoader::load(&self.dungeon)?;
        let route = read_route(&self.route)?;

        match replay(&loaded.dungeon, &route, &loaded.goal, &config) {
            Ok(report) => {
                println!("{} {}", style("Valid route:").bold().green(), route);
                println!("  Moves: {}", report.moves);
                println!("  Rooms visited: {}", report.rooms_visited);
                println!("  Stealth bypasses: {}", report.stealth_bypasses);
                println!("  Items held at the end: {}", report.final_loadout.len());
                Ok(())
            }
            Err(err) => {
                println!("{} {}", style("Invalid route:").bold().red(), err);
                anyhow::bail!("route rejected ({})", err.error_code())
            }
        }
    }
}

fn read_route(path: &Path) -> Result<Route> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read route file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse route JSON: {}", path.display()))
}
