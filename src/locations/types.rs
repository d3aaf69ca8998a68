//! Mining location records.

use crate::weather::Weather;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mining location: static layout plus the per-visit state that mutates
/// on every operation (weather, counters, discoveries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningLocation {
    pub id: String,
    pub name: String,
    /// Danger level 1-5. Bounds the success-rate term
    /// `(6 - danger) * DANGER_BONUS_STEP` to [0.05, 0.25].
    pub danger_level: u8,
    /// Nominal working depth in meters.
    pub depth_m: u32,
    /// Additive success-rate modifier folded into the aggregate delta.
    pub success_modifier: f64,
    /// Scales the base stamina cost of an operation here.
    pub stamina_cost_factor: f64,
    /// Rank index required before progression auto-unlocks this location.
    pub required_rank: usize,
    /// Mineral ids found here.
    pub minerals: Vec<String>,
    /// Per-mineral value multipliers for finds at this location.
    #[serde(default)]
    pub mineral_bonuses: HashMap<String, f64>,
    /// Current surface conditions; re-rolled probabilistically per visit.
    #[serde(default)]
    pub weather: Weather,
    #[serde(default)]
    pub visits: u64,
    #[serde(default)]
    pub last_visited: i64,
    /// Count of each mineral ever extracted here.
    #[serde(default)]
    pub discoveries: HashMap<String, u64>,
}

impl MiningLocation {
    /// Value multiplier for a mineral found here (1.0 when unlisted).
    pub fn bonus_for(&self, mineral_id: &str) -> f64 {
        self.mineral_bonuses.get(mineral_id).copied().unwrap_or(1.0)
    }

    /// Record a visit; called by the resolver after every operation.
    pub fn record_visit(&mut self, now: i64) {
        self.visits += 1;
        self.last_visited = now;
    }

    /// Record an extracted mineral.
    pub fn record_discovery(&mut self, mineral_id: &str) {
        *self.discoveries.entry(mineral_id.to_string()).or_insert(0) += 1;
    }
}
