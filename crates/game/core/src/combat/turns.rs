//! Round counting for a single damage stream.

/// Number of rounds needed to bring `hp` to zero or below.
///
/// # Formula
///
/// ```text
/// stacking == 0:  damage <= 0 → None, else ceil(hp / damage)
/// stacking != 0:  each round
///                   damage <= 0 && stacking < 0 → None (can only get worse)
///                   hp     -= max(damage, 0)
///                   damage += stacking
/// ```
///
/// A target that is already at zero hp or below takes zero rounds.
///
/// # Returns
///
/// `None` if the target can never be killed.
pub fn turns_to_kill(hp: i32, damage: i32, stacking_damage: i32) -> Option<u32> {
    if hp <= 0 {
        return Some(0);
    }

    let mut hp = i64::from(hp);
    let mut damage = i64::from(damage);
    let stacking = i64::from(stacking_damage);

    if stacking == 0 {
        if damage <= 0 {
            return None;
        }
        return u32::try_from((hp + damage - 1) / damage).ok();
    }

    let mut rounds: i64 = 0;
    while hp > 0 {
        if damage <= 0 {
            if stacking < 0 {
                return None;
            }
            // Rounds at non-positive damage deal nothing; skip to the first
            // round where damage turns positive.
            let idle = -damage / stacking + 1;
            rounds += idle;
            damage += idle * stacking;
            continue;
        }
        hp -= damage;
        damage += stacking;
        rounds += 1;
    }

    u32::try_from(rounds).ok()
}
