//! Combat outcome types and fight resolution.

use crate::stats::CombatStats;

use super::turns::turns_to_kill;

/// Outcome of a fight between an attacker and a defender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatOutcome {
    AttackerWins,
    DefenderWins,
    /// Neither side can ever kill the other.
    Tie,
}

/// Outcome of a hero-vs-monster encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterOutcome {
    /// The hero killed the guardian.
    Victory,
    /// The hero died, or the fight could never end.
    Defeat,
}

impl EncounterOutcome {
    pub fn is_victory(self) -> bool {
        matches!(self, EncounterOutcome::Victory)
    }
}

/// Resolve a complete fight. The attacker strikes first.
///
/// # Formula
///
/// ```text
/// attacker.defense += attacker.stacking_defense      (attacker only)
/// a_turns = turns_to_kill(defender.hp,
///                         attacker.offense - defender.defense,
///                         attacker.stacking_offense - defender.stacking_defense)
/// d_turns = turns_to_kill(attacker.hp,
///                         defender.offense - attacker.defense,
///                         defender.stacking_offense - attacker.stacking_defense)
/// ```
///
/// Neither side can kill: tie. Only one can: it wins. Both can: fewer rounds
/// wins, and equal rounds go to the attacker because its blow lands first.
///
/// The one-round defense boost applies to the attacker only. Expected
/// outcomes depend on that arithmetic, so it is kept as is.
pub fn simulate_combat(attacker: &CombatStats, defender: &CombatStats) -> CombatOutcome {
    let mut attacker = *attacker;
    attacker.defense = attacker.defense.saturating_add(attacker.stacking_defense);

    let attacker_turns = turns_to_kill(
        defender.hp,
        attacker.offense.saturating_sub(defender.defense),
        attacker
            .stacking_offense
            .saturating_sub(defender.stacking_defense),
    );
    let defender_turns = turns_to_kill(
        attacker.hp,
        defender.offense.saturating_sub(attacker.defense),
        defender
            .stacking_offense
            .saturating_sub(attacker.stacking_defense),
    );

    match (attacker_turns, defender_turns) {
        (None, None) => CombatOutcome::Tie,
        (Some(_), None) => CombatOutcome::AttackerWins,
        (None, Some(_)) => CombatOutcome::DefenderWins,
        (Some(a), Some(d)) if a <= d => CombatOutcome::AttackerWins,
        (Some(_), Some(_)) => CombatOutcome::DefenderWins,
    }
}

/// Fight a room guardian with the hero's aggregated stats.
///
/// The hero attacks first only with `first_strike`. Anything but a hero win,
/// including a tie, is a defeat.
pub fn resolve_encounter(
    hero: &CombatStats,
    first_strike: bool,
    monster: &CombatStats,
) -> EncounterOutcome {
    let hero_won = if first_strike {
        simulate_combat(hero, monster) == CombatOutcome::AttackerWins
    } else {
        simulate_combat(monster, hero) == CombatOutcome::DefenderWins
    };

    if hero_won {
        EncounterOutcome::Victory
    } else {
        EncounterOutcome::Defeat
    }
}
