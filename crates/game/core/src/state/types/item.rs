//! Item-related state types.
//!
//! This module contains the equippable item description:
//! - ItemCategory: the slot an item occupies (at most one item per slot)
//! - ItemTraits: special abilities granted while equipped
//! - Item: an immutable item lying in a room

use bitflags::bitflags;

use crate::stats::CombatStats;

/// Equipment slot an item occupies.
///
/// A hero holds at most one item per category; picking up a second item of the
/// same category displaces the first.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    Armor,
    /// Charms, ducks and other pocket-sized oddities.
    Trinket,
}

impl ItemCategory {
    /// All categories in slot order.
    pub const ALL: [ItemCategory; 3] = [
        ItemCategory::Weapon,
        ItemCategory::Armor,
        ItemCategory::Trinket,
    ];

    /// Number of equipment slots.
    pub const COUNT: usize = Self::ALL.len();

    /// Slot index of this category, in `0..COUNT`.
    pub const fn index(self) -> usize {
        match self {
            ItemCategory::Weapon => 0,
            ItemCategory::Armor => 1,
            ItemCategory::Trinket => 2,
        }
    }
}

bitflags! {
    /// Special abilities an item grants while equipped.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ItemTraits: u8 {
        /// The hero strikes first in every encounter.
        const FIRST_STRIKE = 1 << 0;
        /// The hero may sneak past monsters it cannot beat.
        const STEALTH      = 1 << 1;
    }
}

/// An equippable item lying in a room.
///
/// Items are never consumed: picking one up leaves it available for later
/// visits, so the room's item list is immutable input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name, ignored by the search.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub category: ItemCategory,
    /// Deltas added to the hero's stat line while equipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus: CombatStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: ItemTraits,
}

impl Item {
    /// Creates an item with no bonus and no traits.
    pub fn new(name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            category,
            bonus: CombatStats::ZERO,
            traits: ItemTraits::empty(),
        }
    }

    /// Sets the stat bonus (builder pattern).
    #[must_use]
    pub fn with_bonus(mut self, bonus: CombatStats) -> Self {
        self.bonus = bonus;
        self
    }

    /// Adds traits (builder pattern).
    #[must_use]
    pub fn with_traits(mut self, traits: ItemTraits) -> Self {
        self.traits |= traits;
        self
    }

    pub fn has_first_strike(&self) -> bool {
        self.traits.contains(ItemTraits::FIRST_STRIKE)
    }

    pub fn is_stealth_capable(&self) -> bool {
        self.traits.contains(ItemTraits::STEALTH)
    }
}
