//! State-space generator.
//!
//! Turns one search state into the states reachable from it:
//!
//! 1. **Settle** the state in its room: fight the guardian (or sneak past it)
//!    and capture the treasure if standing on it.
//! 2. **Item transitions** (free): every non-empty pick of at most one item per
//!    category present in the room, and one drop per equipped item.
//! 3. **Move transitions** (one move each): one per outgoing edge.
//!
//! Settling is re-run every time a state is dequeued, so changing equipment
//! inside a guarded room means fighting the guardian again with the new stats.

use arrayvec::ArrayVec;

use super::action::{Action, ActionBatch};
use super::state::SearchState;
use super::Goal;
use crate::combat::resolve_encounter;
use crate::config::SearchConfig;
use crate::error::DungeonError;
use crate::state::{Dungeon, ItemCategory, Room, RoomId};
use crate::stats::CombatStats;

/// Cost class of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeCost {
    /// Equipment changes cost nothing.
    Free,
    /// Walking to a neighbor costs one move.
    Move,
}

impl EdgeCost {
    pub const fn weight(self) -> u32 {
        match self {
            EdgeCost::Free => 0,
            EdgeCost::Move => 1,
        }
    }
}

/// One outgoing edge of the state graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: SearchState,
    pub cost: EdgeCost,
    pub actions: ActionBatch,
}

/// Read-only view of the state graph for one dungeon and goal.
#[derive(Debug)]
pub struct StateSpace<'a> {
    dungeon: &'a Dungeon,
    goal: &'a Goal,
    hero: CombatStats,
    is_entrance: Vec<bool>,
}

impl<'a> StateSpace<'a> {
    /// Validates the dungeon against the goal and prepares entrance lookup.
    pub fn new(
        dungeon: &'a Dungeon,
        goal: &'a Goal,
        config: &SearchConfig,
    ) -> Result<Self, DungeonError> {
        dungeon.validate()?;
        goal.validate(dungeon)?;

        let mut is_entrance = vec![false; dungeon.len()];
        for entrance in &goal.entrances {
            is_entrance[entrance.index()] = true;
        }

        Ok(Self {
            dungeon,
            goal,
            hero: config.hero,
            is_entrance,
        })
    }

    pub fn dungeon(&self) -> &'a Dungeon {
        self.dungeon
    }

    pub fn is_entrance(&self, room: RoomId) -> bool {
        self.is_entrance.get(room.index()).copied().unwrap_or(false)
    }

    /// One empty-handed state per entrance.
    pub fn seeds(&self) -> impl Iterator<Item = SearchState> + '_ {
        self.goal.entrances.iter().copied().map(SearchState::seed)
    }

    /// Resolves the encounter and treasure capture for `state`'s room.
    ///
    /// Returns `None` when the hero loses the fight and cannot sneak: the
    /// branch ends here.
    pub fn settle(&self, mut state: SearchState) -> Option<SearchState> {
        let room = &self.dungeon[state.room];

        if let Some(monster) = &room.monster {
            let hero = state.loadout.aggregate_stats(&self.hero);
            let outcome =
                resolve_encounter(&hero, state.loadout.has_first_strike(), &monster.stats());
            if !outcome.is_victory() {
                if !state.loadout.has_stealth() {
                    return None;
                }
                state.stealthed = true;
            }
        }

        if state.room == self.goal.treasure && !state.stealthed {
            state.has_treasure = true;
        }

        Some(state)
    }

    /// Treasure in hand, standing at an entrance.
    pub fn is_accepting(&self, state: &SearchState) -> bool {
        state.has_treasure && self.is_entrance(state.room)
    }

    /// Every transition out of a settled state.
    pub fn successors(&self, settled: &SearchState) -> Vec<Transition> {
        let room = &self.dungeon[settled.room];
        let mut out = Vec::new();

        if !settled.stealthed {
            push_pickups(room, settled, &mut out);
            push_drops(settled, &mut out);
        }

        for &neighbor in &room.neighbors {
            let mut actions = ActionBatch::new();
            actions.push(Action::Move(neighbor));
            out.push(Transition {
                state: settled.moved_to(neighbor),
                cost: EdgeCost::Move,
                actions,
            });
        }

        out
    }
}

/// Pushes one transition per non-empty combination of at most one item per
/// category.
///
/// Items are grouped by category and the combinations are enumerated as a
/// mixed-radix counter where digit 0 means "skip this category" and digit
/// `k` means "take the k-th item of this category".
fn push_pickups(room: &Room, settled: &SearchState, out: &mut Vec<Transition>) {
    let mut groups: ArrayVec<(ItemCategory, Vec<usize>), { ItemCategory::COUNT }> =
        ArrayVec::new();
    for category in ItemCategory::ALL {
        let indices: Vec<usize> = room
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.category == category)
            .map(|(index, _)| index)
            .collect();
        if !indices.is_empty() {
            groups.push((category, indices));
        }
    }

    let mut digits = [0usize; ItemCategory::COUNT];
    while advance(&mut digits, &groups) {
        let mut next = *settled;
        let mut actions = ActionBatch::new();

        for ((category, indices), digit) in groups.iter().zip(digits) {
            let Some(choice) = digit.checked_sub(1) else {
                continue;
            };
            let index = indices[choice];
            if next.loadout.equip(&room.items[index]).is_some() {
                actions.push(Action::Drop(*category));
            }
            actions.push(Action::Pickup(index));
        }

        out.push(Transition {
            state: next,
            cost: EdgeCost::Free,
            actions,
        });
    }
}

/// Steps the counter; returns false once every combination has been produced.
///
/// The counter starts at all-skip, which is never yielded.
fn advance(digits: &mut [usize], groups: &[(ItemCategory, Vec<usize>)]) -> bool {
    for (digit, (_, indices)) in digits.iter_mut().zip(groups) {
        *digit += 1;
        if *digit <= indices.len() {
            return true;
        }
        *digit = 0;
    }
    false
}

fn push_drops(settled: &SearchState, out: &mut Vec<Transition>) {
    for (category, _) in settled.loadout.iter() {
        let mut next = *settled;
        next.loadout.unequip(category);

        let mut actions = ActionBatch::new();
        actions.push(Action::Drop(category));
        out.push(Transition {
            state: next,
            cost: EdgeCost::Free,
            actions,
        });
    }
}
