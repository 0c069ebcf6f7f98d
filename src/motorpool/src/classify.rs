//! Component category decision
//!
//! Categories are decided by key presence alone; the values behind the keys
//! are never inspected. A component carrying both hull and gun keys is a
//! hull.

use serde::Serialize;

use crate::document::ConfigTable;

/// Config keys marking a gun. A non-empty `Shells` table counts as well.
const GUN_KEYS: &[&str] = &[
    "GunCaliber",
    "RecoilForce",
    "RecoilLength",
    "OverheatMult",
    "GunWeight",
];

/// Config keys marking a turret.
const TURRET_KEYS: &[&str] = &[
    "VerticalPos",
    "HorizontalTraverse",
    "VerticalTraverse",
    "Stabilizer",
    "TurretWeight",
];

/// Config keys marking a hull.
const HULL_KEYS: &[&str] = &[
    "ReverseGears",
    "TrackThickness",
    "SpringStiffness",
    "MaxSteerAngle",
    "HullWeight",
];

/// The three component categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gun,
    Turret,
    Hull,
}

/// Decides which category a component's config belongs to.
///
/// Checked in order: hull keys, then gun keys (or a non-empty shell table),
/// then turret keys. A config matching nothing falls back to turret; use
/// [`has_indicators`] to tell the fallback apart from a real turret match.
pub fn classify(config: &ConfigTable) -> Category {
    if has_any(config, HULL_KEYS) {
        Category::Hull
    } else if has_any(config, GUN_KEYS) || !config.shells.is_empty() {
        Category::Gun
    } else {
        Category::Turret
    }
}

/// True when at least one indicator key or a non-empty shell table is
/// present.
pub fn has_indicators(config: &ConfigTable) -> bool {
    has_any(config, HULL_KEYS)
        || has_any(config, GUN_KEYS)
        || !config.shells.is_empty()
        || has_any(config, TURRET_KEYS)
}

fn has_any(config: &ConfigTable, keys: &[&str]) -> bool {
    keys.iter().any(|key| config.values.contains_key(*key))
}
