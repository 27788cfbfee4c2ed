//! Dungeon layout loader.
//!
//! A dungeon file lists every room (by position in the list), the entrances
//! and the treasure room. Room ids inside the file are list indices.

use std::path::Path;

use delve_core::{Dungeon, DungeonError, Goal, Room, RoomId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Dungeon data structure for RON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonSpec {
    /// Display name, shown by tools only.
    #[serde(default)]
    pub name: Option<String>,
    pub rooms: Vec<Room>,
    pub entrances: Vec<RoomId>,
    pub treasure: RoomId,
}

impl DungeonSpec {
    /// Checks every room reference and splits it into search inputs.
    pub fn build(self) -> Result<LoadedDungeon, DungeonError> {
        let dungeon = Dungeon::new(self.rooms)?;
        let goal = Goal::new(self.entrances, self.treasure);
        goal.validate(&dungeon)?;
        Ok(LoadedDungeon {
            name: self.name,
            dungeon,
            goal,
        })
    }
}

/// A validated dungeon ready to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDungeon {
    pub name: Option<String>,
    pub dungeon: Dungeon,
    pub goal: Goal,
}

/// Loader for dungeon layouts from RON files.
pub struct DungeonLoader;

impl DungeonLoader {
    /// Load and validate a dungeon from a RON file.
    pub fn load(path: &Path) -> LoadResult<LoadedDungeon> {
        let content = read_file(path)?;
        let loaded = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load dungeon {}: {}", path.display(), e))?;

        debug!(
            path = %path.display(),
            rooms = loaded.dungeon.len(),
            items = loaded.dungeon.item_count(),
            "dungeon loaded"
        );
        Ok(loaded)
    }

    /// Parse and validate a dungeon from RON text.
    pub fn parse(content: &str) -> LoadResult<LoadedDungeon> {
        let spec: DungeonSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dungeon RON: {}", e))?;
        Ok(spec.build()?)
    }
}
