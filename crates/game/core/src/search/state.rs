//! Search state values.

use crate::state::{Loadout, RoomId};

/// Everything that distinguishes two points of the search.
///
/// States are plain values: two states compare equal (and are expanded once)
/// whenever room, treasure flag, loadout and stealth flag agree, no matter
/// which path produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub room: RoomId,
    /// Sticky: once the treasure is captured it stays captured.
    pub has_treasure: bool,
    pub loadout: Loadout,
    /// Set when the hero sneaked past this room's guardian on the current
    /// visit. Cleared by every move.
    pub stealthed: bool,
}

impl SearchState {
    /// The hero standing at an entrance, empty-handed.
    pub fn seed(entrance: RoomId) -> Self {
        Self {
            room: entrance,
            has_treasure: false,
            loadout: Loadout::empty(),
            stealthed: false,
        }
    }

    /// The same hero after walking into `room`.
    #[must_use]
    pub fn moved_to(&self, room: RoomId) -> Self {
        Self {
            room,
            stealthed: false,
            ..*self
        }
    }
}
