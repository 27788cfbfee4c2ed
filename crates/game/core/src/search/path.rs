//! Route reconstruction and presentation.

use core::fmt;

use super::action::Action;
use super::frontier::{NodeId, SearchArena};
use crate::state::RoomId;

/// A minimal-move route: the entrance the hero starts at and every action
/// taken from there, in order.
///
/// The initial placement at the entrance is not an action; a route that
/// starts and ends in the same entrance without moving has no `Move`s.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub entrance: RoomId,
    pub actions: Vec<Action>,
}

impl Route {
    pub fn new(entrance: RoomId, actions: Vec<Action>) -> Self {
        Self { entrance, actions }
    }

    /// Number of `Move` actions: the quantity the search minimizes.
    pub fn move_count(&self) -> usize {
        self.actions.iter().filter(|action| action.is_move()).count()
    }

    /// Rooms entered, counting the starting entrance.
    pub fn rooms_visited(&self) -> usize {
        self.move_count() + 1
    }

    /// Rooms in visiting order, starting with the entrance.
    pub fn rooms(&self) -> impl Iterator<Item = RoomId> + '_ {
        core::iter::once(self.entrance).chain(self.actions.iter().filter_map(|action| {
            match action {
                Action::Move(room) => Some(*room),
                _ => None,
            }
        }))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{action}")?;
        }
        Ok(())
    }
}

/// Follows parent links from `goal` back to its seed.
pub(crate) fn reconstruct(arena: &SearchArena, goal: NodeId) -> Route {
    let mut batches = Vec::new();
    let mut current = goal;
    while let Some(link) = &arena.node(current).parent {
        batches.push(&link.actions);
        current = link.node;
    }

    let entrance = arena.node(current).state.room;
    let actions = batches
        .into_iter()
        .rev()
        .flat_map(|batch| batch.iter().copied())
        .collect();
    Route::new(entrance, actions)
}
