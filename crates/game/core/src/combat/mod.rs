//! Combat resolution system.
//!
//! This module provides pure functions for resolving one-on-one fights.
//! All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `turns_to_kill`: Rounds one side needs to bring the other to zero hp
//! - `simulate_combat`: Full fight between an attacker and a defender
//! - `resolve_encounter`: Hero-vs-monster fight as seen by the search

pub mod result;
pub mod turns;

pub use result::{CombatOutcome, EncounterOutcome, resolve_encounter, simulate_combat};
pub use turns::turns_to_kill;
