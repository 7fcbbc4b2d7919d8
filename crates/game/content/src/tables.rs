use skirmish_core::{TablesOracle, UnitKind, UnitStats};

/// Built-in balance tables matching the shipped campaign data: soldiers
/// move 3 tiles and trade at a 0.55 damage fraction.
///
/// Data-driven rule sets come from
/// [`TablesLoader`](crate::loaders::TablesLoader); this type exists so
/// tools and tests do not need a data file on disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardTables;

impl StandardTables {
    const SOLDIER_STATS: UnitStats = UnitStats::new(3);
    const SOLDIER_VS_SOLDIER: f32 = 0.55;
}

impl TablesOracle for StandardTables {
    fn unit_stats(&self, kind: UnitKind) -> UnitStats {
        match kind {
            UnitKind::Soldier => Self::SOLDIER_STATS,
        }
    }

    fn attack_fraction(&self, attacker: UnitKind, defender: UnitKind) -> f32 {
        match (attacker, defender) {
            (UnitKind::Soldier, UnitKind::Soldier) => Self::SOLDIER_VS_SOLDIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soldier_balance_matches_campaign_data() {
        let tables = StandardTables;
        assert_eq!(tables.unit_stats(UnitKind::Soldier).movement_range, 3);
        assert_eq!(
            tables.attack_fraction(UnitKind::Soldier, UnitKind::Soldier),
            0.55
        );
    }
}
