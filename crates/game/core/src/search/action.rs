//! Route actions.

use core::fmt;

use arrayvec::ArrayVec;

use crate::state::{ItemCategory, RoomId};

/// One step of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Walk to a neighboring room. The only action that costs a move.
    Move(RoomId),
    /// Equip the item at this index of the current room's item list.
    Pickup(usize),
    /// Unequip whatever occupies this slot.
    Drop(ItemCategory),
}

impl Action {
    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(room) => write!(f, "Move({room})"),
            Action::Pickup(item) => write!(f, "Pickup({item})"),
            Action::Drop(category) => write!(f, "Drop({category})"),
        }
    }
}

/// Most actions a single transition can emit: a drop and a pickup per slot.
pub const MAX_STEP_ACTIONS: usize = 2 * ItemCategory::COUNT;

/// Actions emitted by one search transition, in execution order.
pub type ActionBatch = ArrayVec<Action, MAX_STEP_ACTIONS>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_trace_format() {
        assert_eq!(Action::Move(RoomId(3)).to_string(), "Move(3)");
        assert_eq!(Action::Pickup(0).to_string(), "Pickup(0)");
        assert_eq!(Action::Drop(ItemCategory::Trinket).to_string(), "Drop(trinket)");
    }
}
