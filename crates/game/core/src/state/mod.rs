//! Dungeon description and hero equipment.
//!
//! This module owns the read-only input model (rooms, monsters, items) and the
//! loadout value that travels with every search state.
pub mod types;

pub use types::{
    Dungeon, EquippedItem, Item, ItemCategory, ItemTraits, Loadout, Monster, Room, RoomId,
};
