//! Minimum-move treasure retrieval.
//!
//! [`TreasureHunt`] is the entry point: it validates the dungeon against a
//! [`Goal`], runs a 0-1 BFS over [`SearchState`]s and turns the first
//! accepting state into a [`Route`].
//!
//! ```
//! use delve_core::{find_route, Action, Dungeon, Goal, RoomId, SearchConfig, SearchOutcome};
//!
//! let mut dungeon = Dungeon::with_rooms(2);
//! dungeon.link(RoomId(0), RoomId(1)).unwrap();
//! let goal = Goal::new(vec![RoomId(0)], RoomId(1));
//!
//! let outcome = find_route(&dungeon, &goal, &SearchConfig::default()).unwrap();
//! let SearchOutcome::Found(route) = outcome else { panic!("expected a route") };
//! assert_eq!(route.actions, vec![Action::Move(RoomId(1)), Action::Move(RoomId(0))]);
//! ```
pub mod action;
pub mod expand;
mod frontier;
pub mod path;
pub mod state;

pub use action::{Action, ActionBatch, MAX_STEP_ACTIONS};
pub use expand::{EdgeCost, StateSpace, Transition};
pub use frontier::SearchStats;
pub use path::Route;
pub use state::SearchState;

use crate::config::SearchConfig;
use crate::error::{DungeonError, SearchError};
use crate::state::{Dungeon, RoomId};

/// Where the hero may start and finish, and where the treasure lies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Goal {
    pub entrances: Vec<RoomId>,
    pub treasure: RoomId,
}

impl Goal {
    pub fn new(entrances: Vec<RoomId>, treasure: RoomId) -> Self {
        Self {
            entrances,
            treasure,
        }
    }

    /// Checks that every referenced room exists in `dungeon`.
    pub fn validate(&self, dungeon: &Dungeon) -> Result<(), DungeonError> {
        if self.entrances.is_empty() {
            return Err(DungeonError::NoEntrances);
        }
        if let Some(&entrance) = self.entrances.iter().find(|e| !dungeon.contains(**e)) {
            return Err(DungeonError::UnknownEntrance(entrance));
        }
        if !dungeon.contains(self.treasure) {
            return Err(DungeonError::UnknownTreasure(self.treasure));
        }
        Ok(())
    }

    pub fn is_entrance(&self, room: RoomId) -> bool {
        self.entrances.contains(&room)
    }
}

/// What a completed search found.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Found(Route),
    /// Every reachable state was expanded without capturing the treasure and
    /// getting back out.
    NoSolution,
}

impl SearchOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchOutcome::Found(route) => Some(route),
            SearchOutcome::NoSolution => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Outcome plus the counters collected on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// One search over a borrowed dungeon.
///
/// Each call to [`TreasureHunt::solve`] allocates its own arena, so a single
/// `Dungeon` can serve any number of hunts.
#[derive(Clone, Debug)]
pub struct TreasureHunt<'a> {
    dungeon: &'a Dungeon,
    goal: &'a Goal,
    config: SearchConfig,
}

impl<'a> TreasureHunt<'a> {
    pub fn new(dungeon: &'a Dungeon, goal: &'a Goal) -> Self {
        Self {
            dungeon,
            goal,
            config: SearchConfig::default(),
        }
    }

    /// Replaces the search configuration (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidDungeon`] for structural problems, detected before
    /// any state is expanded; [`SearchError::ExplorationLimit`] when the
    /// expanded-state budget runs out.
    pub fn solve(&self) -> Result<SearchReport, SearchError> {
        let space = StateSpace::new(self.dungeon, self.goal, &self.config)?;
        let run = frontier::run(&space, self.config.max_expanded_states)?;

        let outcome = match run.accepted {
            Some(goal) => SearchOutcome::Found(path::reconstruct(&run.arena, goal)),
            None => SearchOutcome::NoSolution,
        };
        Ok(SearchReport {
            outcome,
            stats: run.stats,
        })
    }
}

/// Convenience wrapper around [`TreasureHunt`] that drops the statistics.
pub fn find_route(
    dungeon: &Dungeon,
    goal: &Goal,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    TreasureHunt::new(dungeon, goal)
        .with_config(config.clone())
        .solve()
        .map(|report| report.outcome)
}
