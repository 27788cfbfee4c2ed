//! Command implementations for delve
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod inspect;
mod solve;
mod verify;

pub use inspect::Inspect;
pub use solve::Solve;
pub use verify::Verify;

use delve_core::{CombatStats, Item, ItemTraits};

/// Formats the non-zero parts of a stat line, e.g. `hp +5, off -2`.
pub(crate) fn format_stats(stats: &CombatStats) -> String {
    let parts = [
        ("hp", stats.hp),
        ("off", stats.offense),
        ("def", stats.defense),
        ("stack off", stats.stacking_offense),
        ("stack def", stats.stacking_defense),
    ];
    let shown: Vec<String> = parts
        .iter()
        .filter(|(_, value)| *value != 0)
        .map(|(label, value)| format!("{label} {value:+}"))
        .collect();
    if shown.is_empty() {
        "no bonus".to_string()
    } else {
        shown.join(", ")
    }
}

pub(crate) fn format_item(item: &Item) -> String {
    let mut line = format!("{} [{}] {}", item.name, item.category, format_stats(&item.bonus));
    if item.traits.contains(ItemTraits::FIRST_STRIKE) {
        line.push_str(", first strike");
    }
    if item.traits.contains(ItemTraits::STEALTH) {
        line.push_str(", stealth");
    }
    line
}
