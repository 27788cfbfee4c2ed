//! The five-number stat line used by combat resolution.

use core::ops::{Add, AddAssign};

/// Hit points, flat offense/defense and their per-round stacking deltas.
///
/// The same type describes three things:
/// - a monster's fixed stat line
/// - the hero's base line (see [`crate::SearchConfig::hero`])
/// - an item's bonus, summed onto the hero's line while equipped
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CombatStats {
    pub hp: i32,
    pub offense: i32,
    pub defense: i32,
    /// Added to offense after every combat round.
    pub stacking_offense: i32,
    /// Added to defense after every combat round.
    pub stacking_defense: i32,
}

impl CombatStats {
    /// A line with every stat at zero. Neutral element for item bonuses.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Creates a stat line without stacking deltas.
    pub const fn new(hp: i32, offense: i32, defense: i32) -> Self {
        Self {
            hp,
            offense,
            defense,
            stacking_offense: 0,
            stacking_defense: 0,
        }
    }

    /// Sets both stacking deltas (builder pattern).
    #[must_use]
    pub const fn with_stacking(mut self, stacking_offense: i32, stacking_defense: i32) -> Self {
        self.stacking_offense = stacking_offense;
        self.stacking_defense = stacking_defense;
        self
    }

    /// Clamps hit points to at least one.
    ///
    /// A hero can never enter a fight already dead, no matter how many
    /// negative-hp items are equipped.
    #[must_use]
    pub const fn with_hp_floor(mut self) -> Self {
        if self.hp < 1 {
            self.hp = 1;
        }
        self
    }
}

impl Add for CombatStats {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for CombatStats {
    fn add_assign(&mut self, rhs: Self) {
        self.hp = self.hp.saturating_add(rhs.hp);
        self.offense = self.offense.saturating_add(rhs.offense);
        self.defense = self.defense.saturating_add(rhs.defense);
        self.stacking_offense = self.stacking_offense.saturating_add(rhs.stacking_offense);
        self.stacking_defense = self.stacking_defense.saturating_add(rhs.stacking_defense);
    }
}
