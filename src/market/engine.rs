//! The market engine.
//!
//! Owns per-mineral market records and the active-event list behind one
//! coarse lock, so a host scheduler thread may tick prices while another
//! thread resolves operations and sales. Readers never observe a partial
//! price update.

use super::data::{ECONOMIC_EVENT_TEMPLATES, SPECIAL_EVENT_TEMPLATES};
use super::types::{
    EventTemplate, MarketData, MarketEvent, MarketTickReport, SaleReceipt, Trend,
};
use crate::core::constants::{
    BASE_DEMAND, BASE_SUPPLY, ECONOMIC_EVENT_CHANCE, MARKET_TICK_INTERVAL_SECS,
    PRICE_MULTIPLIER_FLOOR, SALE_DEMAND_PER_UNIT, SALE_SUPPLY_PER_UNIT, SELL_DEMAND_FLOOR,
    SELL_SUPPLY_FLOOR, SPECIAL_EVENT_CHANCE, SUPPLY_DEMAND_MAX, SUPPLY_DEMAND_MIN,
    TREND_THRESHOLD_PERCENT,
};
use crate::core::balance::volatility_for_rarity;
use crate::errors::EngineError;
use crate::minerals::MineralCatalog;
use crate::player::Player;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Everything behind the lock. Also the host-facing snapshot shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub records: HashMap<String, MarketData>,
    pub events: Vec<MarketEvent>,
    pub last_tick: i64,
}

/// Live market state for every tracked mineral.
pub struct MarketEngine {
    inner: Mutex<MarketSnapshot>,
}

impl MarketEngine {
    /// Builds records for every catalog mineral: neutral price, baseline
    /// supply/demand, volatility derived from rarity.
    pub fn new(catalog: &MineralCatalog, now: i64) -> Self {
        let records = catalog
            .iter()
            .map(|mineral| {
                (
                    mineral.id.to_string(),
                    MarketData {
                        mineral_id: mineral.id.to_string(),
                        price_multiplier: 1.0,
                        supply: BASE_SUPPLY,
                        demand: BASE_DEMAND,
                        volatility: volatility_for_rarity(mineral.rarity),
                        trend: Trend::Stable,
                        volume: 0,
                        last_update: now,
                    },
                )
            })
            .collect();

        Self {
            inner: Mutex::new(MarketSnapshot {
                records,
                events: Vec::new(),
                // Make the first scheduled tick eligible immediately.
                last_tick: now - MARKET_TICK_INTERVAL_SECS,
            }),
        }
    }

    /// Rebuilds an engine from a host-persisted snapshot.
    pub fn from_snapshot(snapshot: MarketSnapshot) -> Self {
        Self {
            inner: Mutex::new(snapshot),
        }
    }

    /// Clones the full state for host persistence.
    pub fn snapshot(&self) -> MarketSnapshot {
        self.state().clone()
    }

    fn state(&self) -> MutexGuard<'_, MarketSnapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current price multiplier for a mineral.
    pub fn get_price(&self, mineral_id: &str) -> Option<f64> {
        self.state()
            .records
            .get(mineral_id)
            .map(|r| r.price_multiplier)
    }

    /// Price multiplier, neutral for untracked minerals.
    pub fn price_or_default(&self, mineral_id: &str) -> f64 {
        self.get_price(mineral_id).unwrap_or(1.0)
    }

    /// Full record clone for a mineral.
    pub fn market_data(&self, mineral_id: &str) -> Option<MarketData> {
        self.state().records.get(mineral_id).cloned()
    }

    /// Events still running at `now`.
    pub fn active_events(&self, now: i64) -> Vec<MarketEvent> {
        self.state()
            .events
            .iter()
            .filter(|e| e.is_active(now))
            .cloned()
            .collect()
    }

    /// Advances the market by one tick.
    ///
    /// Guarded internally: calls landing within `MARKET_TICK_INTERVAL_SECS`
    /// of the previous tick are no-ops, so the host may wire this to any
    /// timer cadence. Each effective tick swings every price by
    /// `uniform(-1, 1) * volatility * 100` percent, scaled by active-event
    /// multipliers, purges expired events, and may spawn new ones.
    pub fn tick(&self, now: i64, rng: &mut impl Rng) -> MarketTickReport {
        let mut state = self.state();
        let mut report = MarketTickReport::default();

        if now - state.last_tick < MARKET_TICK_INTERVAL_SECS {
            return report;
        }
        state.last_tick = now;
        report.ticked = true;

        // Purge events that ran out.
        let mut live = Vec::new();
        for event in state.events.drain(..) {
            if event.is_active(now) {
                live.push(event);
            } else {
                log::info!("market event expired: {}", event.name);
                report.events_expired.push(event.name.clone());
            }
        }
        state.events = live;

        // Per-mineral swing multiplier from whatever is still running.
        let mut swing_mult: HashMap<String, f64> = HashMap::new();
        for event in &state.events {
            for (mineral_id, mult) in &event.multipliers {
                *swing_mult.entry(mineral_id.clone()).or_insert(1.0) *= mult;
            }
        }

        for record in state.records.values_mut() {
            let event_mult = swing_mult
                .get(&record.mineral_id)
                .copied()
                .unwrap_or(1.0);
            let change_percent =
                rng.gen_range(-1.0..1.0) * record.volatility * 100.0 * event_mult;

            record.price_multiplier =
                (record.price_multiplier * (1.0 + change_percent / 100.0))
                    .max(PRICE_MULTIPLIER_FLOOR);
            record.trend = if change_percent > TREND_THRESHOLD_PERCENT {
                Trend::Rising
            } else if change_percent < -TREND_THRESHOLD_PERCENT {
                Trend::Falling
            } else {
                Trend::Stable
            };
            record.last_update = now;
            report.minerals_updated += 1;
        }

        // Independent rolls for each event family.
        if rng.gen_bool(ECONOMIC_EVENT_CHANCE) {
            let template =
                ECONOMIC_EVENT_TEMPLATES[rng.gen_range(0..ECONOMIC_EVENT_TEMPLATES.len())];
            let event = instantiate(template, now);
            log::info!("economic event started: {}", event.name);
            report.events_started.push(event.name.clone());
            state.events.push(event);
        }
        if rng.gen_bool(SPECIAL_EVENT_CHANCE) {
            let template =
                SPECIAL_EVENT_TEMPLATES[rng.gen_range(0..SPECIAL_EVENT_TEMPLATES.len())];
            let event = instantiate(template, now);
            log::info!("special event started: {}", event.name);
            report.events_started.push(event.name.clone());
            state.events.push(event);
        }

        report
    }

    /// Applies the supply/demand pressure of a completed sale.
    ///
    /// Selling raises supply and erodes demand, so dumping one mineral
    /// steadily worsens its own sell price. Both scalars are re-clamped to
    /// [SUPPLY_DEMAND_MIN, SUPPLY_DEMAND_MAX] after every update.
    pub fn process_sale(
        &self,
        mineral_id: &str,
        quantity: u64,
        now: i64,
    ) -> Result<(), EngineError> {
        if quantity == 0 {
            return Err(EngineError::InvalidQuantity);
        }
        let mut state = self.state();
        let record = state
            .records
            .get_mut(mineral_id)
            .ok_or_else(|| EngineError::UnknownMineral(mineral_id.to_string()))?;

        let qty = quantity as f64;
        record.supply =
            (record.supply + qty * SALE_SUPPLY_PER_UNIT).clamp(SUPPLY_DEMAND_MIN, SUPPLY_DEMAND_MAX);
        record.demand =
            (record.demand - qty * SALE_DEMAND_PER_UNIT).clamp(SUPPLY_DEMAND_MIN, SUPPLY_DEMAND_MAX);
        record.volume += quantity;
        record.last_update = now;
        Ok(())
    }

    /// Quote for selling `quantity` units right now, before sale pressure.
    pub fn sell_value(
        &self,
        catalog: &MineralCatalog,
        mineral_id: &str,
        quantity: u64,
    ) -> Result<u64, EngineError> {
        if quantity == 0 {
            return Err(EngineError::InvalidQuantity);
        }
        let mineral = catalog
            .get(mineral_id)
            .ok_or_else(|| EngineError::UnknownMineral(mineral_id.to_string()))?;
        let state = self.state();
        let record = state
            .records
            .get(mineral_id)
            .ok_or_else(|| EngineError::UnknownMineral(mineral_id.to_string()))?;

        let value = mineral.base_value as f64
            * record.price_multiplier
            * (record.demand / 100.0).max(SELL_DEMAND_FLOOR)
            * (100.0 / record.supply).max(SELL_SUPPLY_FLOOR)
            * quantity as f64;
        Ok(value.round() as u64)
    }

    /// Full player sale: quote, deduct inventory, credit money, then push
    /// the sale pressure into the market. Nothing mutates on a failed
    /// validation.
    pub fn sell(
        &self,
        player: &mut Player,
        catalog: &MineralCatalog,
        mineral_id: &str,
        quantity: u64,
        now: i64,
    ) -> Result<SaleReceipt, EngineError> {
        let total_value = self.sell_value(catalog, mineral_id, quantity)?;
        player.remove_minerals(mineral_id, quantity)?;
        player.add_earnings(total_value);
        self.process_sale(mineral_id, quantity, now)?;

        log::debug!(
            "{} sold {}x {} for {}",
            player.name,
            quantity,
            mineral_id,
            total_value
        );
        Ok(SaleReceipt {
            mineral_id: mineral_id.to_string(),
            quantity,
            total_value,
        })
    }
}

fn instantiate(template: EventTemplate, now: i64) -> MarketEvent {
    MarketEvent {
        id: uuid::Uuid::new_v4().to_string(),
        name: template.name.to_string(),
        kind: template.kind,
        multipliers: template
            .affected
            .iter()
            .map(|(id, mult)| (id.to_string(), *mult))
            .collect(),
        started_at: now,
        duration_secs: template.duration_secs,
    }
}
