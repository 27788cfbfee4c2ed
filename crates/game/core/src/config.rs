use crate::stats::CombatStats;

/// Search configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// The hero's stat line before any item is equipped.
    pub hero: CombatStats,
    /// Expanded-state budget. A search that would expand more states gives up
    /// with [`crate::SearchError::ExplorationLimit`].
    pub max_expanded_states: usize,
}

impl SearchConfig {
    // ===== base hero stats =====
    pub const BASE_HP: i32 = 10_000;
    pub const BASE_OFFENSE: i32 = 3;
    pub const BASE_DEFENSE: i32 = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_EXPANDED_STATES: usize = 2_000_000;

    pub const fn base_hero() -> CombatStats {
        CombatStats::new(Self::BASE_HP, Self::BASE_OFFENSE, Self::BASE_DEFENSE)
    }

    pub fn new() -> Self {
        Self {
            hero: Self::base_hero(),
            max_expanded_states: Self::DEFAULT_MAX_EXPANDED_STATES,
        }
    }

    /// Replaces the hero's base stat line (builder pattern).
    #[must_use]
    pub fn with_hero(mut self, hero: CombatStats) -> Self {
        self.hero = hero;
        self
    }

    /// Replaces the expanded-state budget (builder pattern).
    #[must_use]
    pub fn with_max_expanded_states(mut self, limit: usize) -> Self {
        self.max_expanded_states = limit;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
