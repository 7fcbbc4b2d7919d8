//! Deterministic combat resolution.
//!
//! One exchange is sequential and asymmetric: the defender takes damage
//! first, and any counterattack is scaled by the defender's remaining
//! health, not the health it entered the exchange with.

use crate::env::TablesOracle;
use crate::state::Unit;

/// Both sides of an exchange after resolution. `None` means the unit
/// died and its grid cell must be cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatOutcome {
    pub attacker: Option<Unit>,
    pub defender: Option<Unit>,
}

/// Resolves one attack between adjacent units. Pure: identical inputs
/// always produce identical outcomes.
///
/// Damage is `floor(matrix[attacker][defender] * attacker.health)`.
/// Death happens only when health falls strictly below zero; an exact
/// result of 0 leaves the unit in place at 0 health. The boundary is
/// deliberate and load-bearing: an exact-kill defender survives the
/// bookkeeping (and counterattacks for floor(fraction * 0) = 0), while
/// an overkill defender dies before any counterattack.
pub fn resolve_attack(
    attacker: Unit,
    defender: Unit,
    tables: &(impl TablesOracle + ?Sized),
) -> CombatOutcome {
    let mut attacker = attacker;
    let mut defender = defender;

    let strike = scaled_damage(tables.attack_fraction(attacker.kind, defender.kind), attacker.health);
    let defender_health = i32::from(defender.health) - strike;
    if defender_health < 0 {
        return CombatOutcome {
            attacker: Some(attacker),
            defender: None,
        };
    }
    defender.health = defender_health as u8;

    let counter = scaled_damage(tables.attack_fraction(defender.kind, attacker.kind), defender.health);
    let attacker_health = i32::from(attacker.health) - counter;
    if attacker_health < 0 {
        return CombatOutcome {
            attacker: None,
            defender: Some(defender),
        };
    }
    attacker.health = attacker_health as u8;

    CombatOutcome {
        attacker: Some(attacker),
        defender: Some(defender),
    }
}

fn scaled_damage(fraction: f32, health: u8) -> i32 {
    (fraction * f32::from(health)).floor() as i32
}
