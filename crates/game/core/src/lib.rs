//! Minimum-move treasure retrieval over a dungeon of rooms.
//!
//! `delve-core` holds the rules (combat, loadouts, settling a room) and the
//! search that applies them. Everything here is pure and synchronous: the
//! dungeon is borrowed read-only, and each search owns its own arena.
//! Loading dungeons from disk and presenting routes live in the
//! `delve-content` and `delve-cli` crates.
pub mod combat;
pub mod config;
pub mod error;
pub mod replay;
pub mod search;
pub mod state;
pub mod stats;

pub use combat::{
    CombatOutcome, EncounterOutcome, resolve_encounter, simulate_combat, turns_to_kill,
};
pub use config::SearchConfig;
pub use error::{DungeonError, EngineError, ErrorSeverity, SearchError};
pub use replay::{ReplayError, ReplayReport, replay};
pub use search::{
    Action, ActionBatch, EdgeCost, Goal, Route, SearchOutcome, SearchReport, SearchState,
    SearchStats, StateSpace, Transition, TreasureHunt, find_route,
};
pub use state::{
    Dungeon, EquippedItem, Item, ItemCategory, ItemTraits, Loadout, Monster, Room, RoomId,
};
pub use stats::CombatStats;
