use crate::state::UnitKind;

/// Oracle providing balance tables: per-kind stats and the kind-vs-kind
/// attack matrix.
pub trait TablesOracle: Send + Sync {
    fn unit_stats(&self, kind: UnitKind) -> UnitStats;

    /// Damage fraction in `[0, 1]` dealt by `attacker` against
    /// `defender`; actual damage is `floor(fraction * health)`.
    fn attack_fraction(&self, attacker: UnitKind, defender: UnitKind) -> f32;
}

/// Static per-kind stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    /// Movement budget in tiles per action; always positive.
    pub movement_range: u32,
}

impl UnitStats {
    pub const fn new(movement_range: u32) -> Self {
        Self { movement_range }
    }
}
