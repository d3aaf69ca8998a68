//! Market record and event types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Direction of the last applied price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Trend {
    Rising,
    Falling,
    #[default]
    Stable,
}

/// Live market record for one mineral. Keyed by mineral id in the engine's
/// record table; the catalog entry itself never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub mineral_id: String,
    /// Multiplier on the mineral's base value. Floored above zero.
    pub price_multiplier: f64,
    /// Clamped to [SUPPLY_DEMAND_MIN, SUPPLY_DEMAND_MAX].
    pub supply: f64,
    /// Clamped to [SUPPLY_DEMAND_MIN, SUPPLY_DEMAND_MAX].
    pub demand: f64,
    /// Per-tick swing magnitude, in [0, 1].
    pub volatility: f64,
    pub trend: Trend,
    /// Units sold through the market since engine construction.
    pub volume: u64,
    pub last_update: i64,
}

/// Event category: economic events are broad market moves, special events
/// are rarer single-commodity disruptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Economic,
    Special,
}

/// A live market event instantiated from a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketEvent {
    pub id: String,
    pub name: String,
    pub kind: EventKind,
    /// Per-mineral multipliers applied to tick price swings.
    pub multipliers: HashMap<String, f64>,
    pub started_at: i64,
    pub duration_secs: i64,
}

impl MarketEvent {
    /// Active status is derived from the clock, never stored.
    pub fn is_active(&self, now: i64) -> bool {
        now - self.started_at < self.duration_secs
    }

    /// Swing multiplier this event contributes for a mineral (1.0 when the
    /// mineral is unaffected).
    pub fn multiplier_for(&self, mineral_id: &str) -> f64 {
        self.multipliers.get(mineral_id).copied().unwrap_or(1.0)
    }
}

/// Fixed template an event is instantiated from.
#[derive(Debug, Clone, Copy)]
pub struct EventTemplate {
    pub name: &'static str,
    pub kind: EventKind,
    pub affected: &'static [(&'static str, f64)],
    pub duration_secs: i64,
}

/// What one `tick` call did; returned for host notification.
#[derive(Debug, Clone, Default)]
pub struct MarketTickReport {
    /// False when the call landed inside the guard interval (no-op).
    pub ticked: bool,
    pub minerals_updated: usize,
    pub events_started: Vec<String>,
    pub events_expired: Vec<String>,
}

/// Outcome of a completed player sale.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleReceipt {
    pub mineral_id: String,
    pub quantity: u64,
    pub total_value: u64,
}
