//! Route replay.
//!
//! Re-walks a [`Route`] against a dungeon with the same settling rules the
//! search uses, so routes loaded from disk (or produced by another tool) can
//! be checked before anyone trusts them.
//!
//! Encounters are re-checked when the hero arrives in a room, before each move
//! out of it, and once more at the end of the route. Item actions between two
//! checks are not fought one by one.

use tracing::debug;

use crate::config::SearchConfig;
use crate::error::{DungeonError, EngineError, ErrorSeverity};
use crate::search::{Action, Goal, Route, SearchState, StateSpace};
use crate::state::{Dungeon, ItemCategory, Loadout, RoomId};

/// Summary of a route that replayed cleanly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayReport {
    pub moves: usize,
    /// Rooms entered, counting the starting entrance.
    pub rooms_visited: usize,
    /// Arrivals where the hero sneaked past a guardian it could not beat.
    pub stealth_bypasses: usize,
    pub final_loadout: Loadout,
}

/// Why a route does not hold up. `step` is the index of the offending action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReplayError {
    #[error("invalid dungeon: {0}")]
    InvalidDungeon(#[from] DungeonError),

    #[error("route starts in room {0}, which is not an entrance")]
    NotAnEntrance(RoomId),

    #[error("step {step}: no edge from room {from} to room {to}")]
    NoSuchEdge {
        step: usize,
        from: RoomId,
        to: RoomId,
    },

    #[error("step {step}: room {room} has no item at index {item}")]
    UnknownItem {
        step: usize,
        room: RoomId,
        item: usize,
    },

    #[error("step {step}: nothing equipped in the {category} slot")]
    EmptySlot { step: usize, category: ItemCategory },

    #[error("step {step}: cannot touch items while sneaking through room {room}")]
    ItemWhileStealthed { step: usize, room: RoomId },

    /// `step` is the number of actions taken before the fatal fight.
    #[error("step {step}: hero is defeated in room {room}")]
    Defeated { step: usize, room: RoomId },

    #[error("route ends in room {0}, which is not an entrance")]
    EndsOutsideEntrance(RoomId),

    #[error("route ends without the treasure")]
    TreasureNotCaptured,
}

impl EngineError for ReplayError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDungeon(inner) => inner.error_code(),
            Self::NotAnEntrance(_) => "REPLAY_NOT_AN_ENTRANCE",
            Self::NoSuchEdge { .. } => "REPLAY_NO_SUCH_EDGE",
            Self::UnknownItem { .. } => "REPLAY_UNKNOWN_ITEM",
            Self::EmptySlot { .. } => "REPLAY_EMPTY_SLOT",
            Self::ItemWhileStealthed { .. } => "REPLAY_ITEM_WHILE_STEALTHED",
            Self::Defeated { .. } => "REPLAY_DEFEATED",
            Self::EndsOutsideEntrance(_) => "REPLAY_ENDS_OUTSIDE_ENTRANCE",
            Self::TreasureNotCaptured => "REPLAY_TREASURE_NOT_CAPTURED",
        }
    }
}

/// Replays `route` and reports what it achieved.
pub fn replay(
    dungeon: &Dungeon,
    route: &Route,
    goal: &Goal,
    config: &SearchConfig,
) -> Result<ReplayReport, ReplayError> {
    let space = StateSpace::new(dungeon, goal, config)?;
    if !space.is_entrance(route.entrance) {
        return Err(ReplayError::NotAnEntrance(route.entrance));
    }

    let settle = |state: SearchState, step: usize| {
        space.settle(state).ok_or(ReplayError::Defeated {
            step,
            room: state.room,
        })
    };

    let mut state = settle(SearchState::seed(route.entrance), 0)?;
    let mut stealth_bypasses = usize::from(state.stealthed);

    for (step, action) in route.actions.iter().copied().enumerate() {
        match action {
            Action::Move(to) => {
                state = settle(state, step)?;
                if !dungeon[state.room].neighbors.contains(&to) {
                    return Err(ReplayError::NoSuchEdge {
                        step,
                        from: state.room,
                        to,
                    });
                }
                state = settle(state.moved_to(to), step + 1)?;
                stealth_bypasses += usize::from(state.stealthed);
            }
            Action::Pickup(index) => {
                if state.stealthed {
                    return Err(ReplayError::ItemWhileStealthed {
                        step,
                        room: state.room,
                    });
                }
                let item = dungeon[state.room]
                    .item(index)
                    .ok_or(ReplayError::UnknownItem {
                        step,
                        room: state.room,
                        item: index,
                    })?;
                state.loadout.equip(item);
            }
            Action::Drop(category) => {
                if state.stealthed {
                    return Err(ReplayError::ItemWhileStealthed {
                        step,
                        room: state.room,
                    });
                }
                if state.loadout.unequip(category).is_none() {
                    return Err(ReplayError::EmptySlot { step, category });
                }
            }
        }
    }

    let state = settle(state, route.actions.len())?;
    if !space.is_entrance(state.room) {
        return Err(ReplayError::EndsOutsideEntrance(state.room));
    }
    if !state.has_treasure {
        return Err(ReplayError::TreasureNotCaptured);
    }

    let report = ReplayReport {
        moves: route.move_count(),
        rooms_visited: route.rooms_visited(),
        stealth_bypasses,
        final_loadout: state.loadout,
    };
    debug!(
        moves = report.moves,
        stealth_bypasses = report.stealth_bypasses,
        "route replayed"
    );
    Ok(report)
}
