//! Rules tables loader.
//!
//! Loads per-kind unit stats and the attack matrix from a TOML file and
//! exposes them as a [`TablesOracle`].

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use skirmish_core::{TablesOracle, UnitKind, UnitStats};
use strum::IntoEnumIterator;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct TablesToml {
    stats: HashMap<UnitKind, StatsToml>,
    attack: Vec<AttackEntryToml>,
}

#[derive(Debug, Deserialize)]
struct StatsToml {
    movement_range: u32,
}

#[derive(Debug, Deserialize)]
struct AttackEntryToml {
    attacker: UnitKind,
    defender: UnitKind,
    fraction: f32,
}

/// Data-driven balance tables. Completeness over every kind pairing is
/// checked at load time, so lookups never miss at play time.
#[derive(Clone, Debug, PartialEq)]
pub struct RulesTables {
    stats: HashMap<UnitKind, UnitStats>,
    matrix: HashMap<(UnitKind, UnitKind), f32>,
}

impl TablesOracle for RulesTables {
    fn unit_stats(&self, kind: UnitKind) -> UnitStats {
        // Missing entries are rejected by the loader.
        self.stats.get(&kind).copied().unwrap_or(UnitStats::new(1))
    }

    fn attack_fraction(&self, attacker: UnitKind, defender: UnitKind) -> f32 {
        self.matrix.get(&(attacker, defender)).copied().unwrap_or(0.0)
    }
}

/// Loader for rules tables from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    pub fn load(path: &Path) -> LoadResult<RulesTables> {
        let content = read_file(path)?;
        let data: TablesToml = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        let mut stats = HashMap::new();
        for (kind, entry) in data.stats {
            if entry.movement_range == 0 {
                anyhow::bail!("movement_range for {kind} must be positive");
            }
            stats.insert(kind, UnitStats::new(entry.movement_range));
        }

        let mut matrix = HashMap::new();
        for entry in data.attack {
            if !(0.0..=1.0).contains(&entry.fraction) {
                anyhow::bail!(
                    "attack fraction {} for {} vs {} is outside [0, 1]",
                    entry.fraction,
                    entry.attacker,
                    entry.defender
                );
            }
            matrix.insert((entry.attacker, entry.defender), entry.fraction);
        }

        for kind in UnitKind::iter() {
            if !stats.contains_key(&kind) {
                anyhow::bail!("missing stats entry for {kind}");
            }
            for other in UnitKind::iter() {
                if !matrix.contains_key(&(kind, other)) {
                    anyhow::bail!("missing attack entry for {kind} vs {other}");
                }
            }
        }

        Ok(RulesTables { stats, matrix })
    }
}
