//! Search a dungeon and print the route.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use delve_content::{DungeonLoader, LoadedDungeon};
use delve_core::{Action, Route, SearchOutcome, SearchReport, SearchStats, TreasureHunt};

use crate::config::{EnvOverrides, load_search_config};

/// Search a dungeon for the shortest treasure route
#[derive(Parser)]
pub struct Solve {
    /// Dungeon file (RON)
    #[arg(value_name = "DUNGEON")]
    dungeon: PathBuf,

    /// Search configuration (TOML); defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the route as JSON for `delve verify`
    #[arg(short, long, value_name = "FILE")]
    save_route: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Numbered route with item names and search counters
    Summary,
    /// Full JSON report
    Json,
}

impl Solve {
    pub fn execute(self) -> Result<()> {
        let overrides = EnvOverrides::from_env();
        let config = load_search_config(self.config.as_deref(), &overrides)?;
        let loaded = DungeonLoader::load(&self.dungeon)?;

        let report = TreasureHunt::new(&loaded.dungeon, &loaded.goal)
            .with_config(config)
            .solve()
            .with_context(|| format!("Search failed for {}", self.dungeon.display()))?;

        if let (Some(path), Some(route)) = (&self.save_route, report.outcome.route()) {
            let json = serde_json::to_string_pretty(route)?;
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write route: {}", path.display()))?;
        }

        match self.format {
            OutputFormat::Summary => print_summary(&loaded, &report, overrides.show_stats()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
        Ok(())
    }
}

fn print_summary(loaded: &LoadedDungeon, report: &SearchReport, show_stats: bool) {
    match &report.outcome {
        SearchOutcome::Found(route) => print_route(loaded, route),
        SearchOutcome::NoSolution => {
            println!("{}", style("No solution").bold().red());
        }
    }

    if show_stats {
        println!();
        print_stats(&report.stats);
    }
}

fn print_route(loaded: &LoadedDungeon, route: &Route) {
    println!(
        "{} {} moves, {} rooms, starting at entrance {}",
        style("Route found:").bold().green(),
        route.move_count(),
        route.rooms_visited(),
        route.entrance
    );

    let mut room = route.entrance;
    for (step, action) in route.actions.iter().enumerate() {
        let detail = match action {
            Action::Move(to) => {
                room = *to;
                String::new()
            }
            Action::Pickup(index) => loaded
                .dungeon
                .room(room)
                .and_then(|r| r.item(*index))
                .map(|item| format!("  {}", style(&item.name).dim()))
                .unwrap_or_default(),
            Action::Drop(_) => String::new(),
        };
        println!("  {:>3}. {action}{detail}", step + 1);
    }
}

fn print_stats(stats: &SearchStats) {
    println!("{}", style("Search:").bold().yellow());
    println!("  Expanded: {}", stats.expanded);
    println!("  Discovered: {}", stats.discovered);
    println!("  Dead ends: {}", stats.dead_ends);
    println!("  Relinked: {}", stats.relinked);
}
