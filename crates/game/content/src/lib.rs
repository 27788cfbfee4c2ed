//! Data-driven dungeon definitions and loaders.
//!
//! This crate reads the files the search consumes:
//! - Dungeon layouts with their entrances and treasure room (RON)
//! - Search configuration (TOML)
//!
//! All loaders use delve-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, DungeonLoader, DungeonSpec, LoadResult, LoadedDungeon};
