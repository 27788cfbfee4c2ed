//! Loadout system for the hero.
//!
//! Defines what the hero currently carries, which determines its combat stats
//! and whether it strikes first or can sneak past guardians.

use super::{Item, ItemCategory, ItemTraits};
use crate::stats::CombatStats;

/// The part of an [`Item`] that matters once it is equipped.
///
/// Names and origin rooms are dropped, so two identical items found in
/// different rooms yield the same loadout (and the same search state).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub bonus: CombatStats,
    pub traits: ItemTraits,
}

impl From<&Item> for EquippedItem {
    fn from(item: &Item) -> Self {
        Self {
            bonus: item.bonus,
            traits: item.traits,
        }
    }
}

/// Items currently equipped, one slot per [`ItemCategory`].
///
/// The slot array makes "at most one item per category" hold by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    slots: [Option<EquippedItem>; ItemCategory::COUNT],
}

impl Loadout {
    /// Creates an empty loadout.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips an item, returning the displaced same-category item if any.
    pub fn equip(&mut self, item: &Item) -> Option<EquippedItem> {
        self.slots[item.category.index()].replace(EquippedItem::from(item))
    }

    /// Removes the item of `category`, returning it if one was equipped.
    pub fn unequip(&mut self, category: ItemCategory) -> Option<EquippedItem> {
        self.slots[category.index()].take()
    }

    pub fn get(&self, category: ItemCategory) -> Option<&EquippedItem> {
        self.slots[category.index()].as_ref()
    }

    pub fn is_equipped(&self, category: ItemCategory) -> bool {
        self.slots[category.index()].is_some()
    }

    /// Equipped items with their categories, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemCategory, &EquippedItem)> {
        ItemCategory::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(category, slot)| slot.as_ref().map(|item| (*category, item)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Hero stats: base line plus every equipped bonus, hp floored at 1.
    pub fn aggregate_stats(&self, base: &CombatStats) -> CombatStats {
        self.slots
            .iter()
            .flatten()
            .fold(*base, |total, item| total + item.bonus)
            .with_hp_floor()
    }

    /// Union of every equipped item's traits.
    pub fn traits(&self) -> ItemTraits {
        self.slots
            .iter()
            .flatten()
            .fold(ItemTraits::empty(), |acc, item| acc | item.traits)
    }

    pub fn has_first_strike(&self) -> bool {
        self.traits().contains(ItemTraits::FIRST_STRIKE)
    }

    pub fn has_stealth(&self) -> bool {
        self.traits().contains(ItemTraits::STEALTH)
    }
}
