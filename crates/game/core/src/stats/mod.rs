//! Stat lines shared by heroes, monsters and item bonuses.
//!
//! Every combatant is described by the same five numbers. Items carry a stat
//! line too, interpreted as additive deltas on top of the hero's base line.

pub mod line;

pub use line::CombatStats;
