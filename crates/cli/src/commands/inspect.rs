//! Print the contents of a dungeon file.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use delve_content::{DungeonLoader, LoadedDungeon};

use super::{format_item, format_stats};

/// Print the rooms, guardians and items of a dungeon
#[derive(Parser)]
pub struct Inspect {
    /// Dungeon file (RON)
    #[arg(value_name = "DUNGEON")]
    dungeon: PathBuf,
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let loaded = DungeonLoader::load(&self.dungeon)?;
        print_dungeon(&loaded);
        Ok(())
    }
}

fn print_dungeon(loaded: &LoadedDungeon) {
    let title = loaded.name.as_deref().unwrap_or("(unnamed dungeon)");
    println!("{}", style(format!("=== {title} ===")).bold().green());
    println!();

    let entrances: Vec<String> = loaded.goal.entrances.iter().map(ToString::to_string).collect();
    println!("{} {}", style("Rooms:").bold().cyan(), loaded.dungeon.len());
    println!("{} {}", style("Entrances:").bold().cyan(), entrances.join(", "));
    println!("{} {}", style("Treasure:").bold().cyan(), loaded.goal.treasure);
    println!();

    for (id, room) in loaded.dungeon.rooms() {
        let mut tags = Vec::new();
        if loaded.goal.is_entrance(id) {
            tags.push("entrance");
        }
        if loaded.goal.treasure == id {
            tags.push("treasure");
        }
        let tags = if tags.is_empty() {
            String::new()
        } else {
            format!(" ({})", tags.join(", "))
        };
        println!("{}{}", style(format!("Room {id}")).bold().yellow(), tags);

        if room.neighbors.is_empty() {
            println!("  Exits: none");
        } else {
            let exits: Vec<String> = room.neighbors.iter().map(ToString::to_string).collect();
            println!("  Exits: {}", exits.join(", "));
        }

        if let Some(monster) = &room.monster {
            println!("  Guardian: {}", format_stats(&monster.stats()));
        }
        for (index, item) in room.items.iter().enumerate() {
            println!("  Item {index}: {}", format_item(item));
        }
    }
}
