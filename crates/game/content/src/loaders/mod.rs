//! Content loaders for reading dungeon data from files.
//!
//! Each loader turns one file format into delve-core values, attaching the
//! file path to every error.

pub mod config;
pub mod dungeon;

pub use config::ConfigLoader;
pub use dungeon::{DungeonLoader, DungeonSpec, LoadedDungeon};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
