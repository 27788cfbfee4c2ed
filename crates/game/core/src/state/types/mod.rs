pub mod common;
pub mod item;
pub mod loadout;
pub mod monster;
pub mod room;

// Re-export common types
pub use common::RoomId;

// Re-export item types
pub use item::{Item, ItemCategory, ItemTraits};

// Re-export loadout types
pub use loadout::{EquippedItem, Loadout};

// Re-export monster and room types
pub use monster::Monster;
pub use room::{Dungeon, Room};
