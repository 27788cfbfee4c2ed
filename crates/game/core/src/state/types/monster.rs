//! Monsters guarding rooms.

use crate::stats::CombatStats;

/// A room guardian.
///
/// Monsters are never permanently defeated: every entry into the room (and
/// every loadout change made inside it) triggers a fresh fight.
///
/// Serialized as its bare stat line, so a dungeon file writes
/// `monster: Some((hp: 10, offense: 1))`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Monster {
    pub stats: CombatStats,
}

impl Monster {
    pub const fn new(hp: i32, offense: i32, defense: i32) -> Self {
        Self {
            stats: CombatStats::new(hp, offense, defense),
        }
    }

    /// Sets both stacking deltas (builder pattern).
    #[must_use]
    pub const fn with_stacking(mut self, stacking_offense: i32, stacking_defense: i32) -> Self {
        self.stats = self.stats.with_stacking(stacking_offense, stacking_defense);
        self
    }

    /// The monster's stat line as seen by the combat resolver.
    pub const fn stats(&self) -> CombatStats {
        self.stats
    }
}

impl From<CombatStats> for Monster {
    fn from(stats: CombatStats) -> Self {
        Self { stats }
    }
}
