//! The mining resolver: turns a (player, location, risk) triple into a
//! probabilistic outcome and applies the resulting state changes.

use super::types::{AppliedModifiers, FailureReason, MineResult};
use crate::core::balance::base_xp_for_rarity;
use crate::core::constants::{
    BASE_SUCCESS_RATE, BONUS_DISCOVERY_BASE_CHANCE, BONUS_DISCOVERY_VALUE_MULT,
    CONSOLATION_XP_MAX, CONSOLATION_XP_MIN, DANGER_BONUS_STEP, HIGH_RISK_PENALTY,
    HIGH_RISK_THRESHOLD, MAX_RISK_MULTIPLIER, MIN_RISK_MULTIPLIER, RARITY_WEIGHT_CEILING,
    STAMINA_COST_BASE, SUCCESS_RATE_MAX, SUCCESS_RATE_MIN, VALUE_XP_DIVISOR,
    WEATHER_SHIFT_CHANCE,
};
use crate::core::constants::RISK_XP_FACTOR;
use crate::errors::EngineError;
use crate::locations::MiningLocation;
use crate::market::MarketEngine;
use crate::minerals::{Mineral, MineralCatalog, Rarity};
use crate::modifiers::{aggregate, OperationModifiers};
use crate::player::Player;
use crate::weather::roll_weather;
use rand::Rng;

/// Flavor lines for a missed strike.
const FAILURE_FLAVOR_TEXTS: [&str; 6] = [
    "The drill bit shattered on a granite intrusion.",
    "The seam collapsed before anything could be hauled out.",
    "Groundwater flooded the bore hole.",
    "The scanner misread the strata entirely.",
    "A pressure pocket vented and forced an evacuation.",
    "The extracted ore crumbled to worthless slag.",
];

/// Flavor lines for a bonus discovery.
const BONUS_DISCOVERY_TEXTS: [&str; 4] = [
    "A hidden side pocket doubled back on the main seam.",
    "The tailings turned out richer than the face itself.",
    "An old abandoned bore intersected the dig, ore still in the cart.",
    "The fracture line opened straight into a crystal chamber.",
];

/// Resolved success rate for an operation, before and after the high-risk
/// penalty. Exposed for property tests and balance tooling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuccessRate {
    /// Clamped to [SUCCESS_RATE_MIN, SUCCESS_RATE_MAX].
    pub unscaled: f64,
    /// What the roll is made against. Equal to `unscaled`, or
    /// `unscaled * HIGH_RISK_PENALTY` when risk exceeds the threshold.
    pub resolved: f64,
    pub penalty_applied: bool,
}

/// Computes the success rate from the danger level, the aggregated modifier
/// delta, and the risk dial. Pushing risk past the threshold trades
/// reliability for the reward scaling applied elsewhere.
pub fn resolve_success_rate(danger_level: u8, modifier_delta: f64, risk: f64) -> SuccessRate {
    let danger_bonus = (6.0 - f64::from(danger_level)) * DANGER_BONUS_STEP;
    let unscaled = (BASE_SUCCESS_RATE + danger_bonus + modifier_delta)
        .clamp(SUCCESS_RATE_MIN, SUCCESS_RATE_MAX);
    if risk > HIGH_RISK_THRESHOLD {
        SuccessRate {
            unscaled,
            resolved: unscaled * HIGH_RISK_PENALTY,
            penalty_applied: true,
        }
    } else {
        SuccessRate {
            unscaled,
            resolved: unscaled,
            penalty_applied: false,
        }
    }
}

/// Sampling weight for a mineral at a given risk dial:
/// `max(1, 8 - tier) * risk^(tier - 1)`, so rarer tiers gain weight
/// exponentially as risk rises. `rare_bonus` adds weight to
/// Legendary-and-above tiers only.
pub fn sampling_weight(mineral: &Mineral, risk: f64, rare_bonus: f64) -> f64 {
    let tier = mineral.rarity.tier();
    let base = f64::from(RARITY_WEIGHT_CEILING.saturating_sub(tier).max(1));
    let mut weight = base * risk.powi(tier as i32 - 1);
    if mineral.rarity >= Rarity::Legendary {
        weight *= 1.0 + rare_bonus;
    }
    weight
}

/// Cumulative-weight draw over the eligible pool. Ties break by encounter
/// order, so the selection is deterministic given the RNG stream.
pub fn select_mineral<'a>(
    eligible: &[&'a Mineral],
    risk: f64,
    rare_bonus: f64,
    rng: &mut impl Rng,
) -> Option<&'a Mineral> {
    if eligible.is_empty() {
        return None;
    }
    let total: f64 = eligible
        .iter()
        .map(|m| sampling_weight(m, risk, rare_bonus))
        .sum();
    let mut roll = rng.gen::<f64>() * total;
    for &mineral in eligible {
        roll -= sampling_weight(mineral, risk, rare_bonus);
        if roll < 0.0 {
            return Some(mineral);
        }
    }
    eligible.last().copied()
}

/// Experience for a successful extraction.
fn experience_for(rarity: Rarity, value: u64, risk: f64) -> u32 {
    let base = i64::from(base_xp_for_rarity(rarity));
    let value_term = (value / VALUE_XP_DIVISOR) as i64;
    let risk_term = (f64::from(base_xp_for_rarity(rarity)) * (risk - 1.0) * RISK_XP_FACTOR)
        .floor() as i64;
    (base + value_term + risk_term).max(1) as u32
}

/// Performs one mining operation.
///
/// Expected outcomes (a missed strike, insufficient stamina, an empty pool)
/// come back as a `MineResult` with `success == false`; only host mistakes
/// (bad risk dial, locked location, a location referencing a mineral the
/// catalog does not know) are errors, and those mutate nothing.
///
/// On resolution the player's stamina, inventory, money, and streak
/// counters are updated, as are the location's visit counters; experience
/// is returned in the result for the host to feed to `apply_progression`.
pub fn perform_operation(
    player: &mut Player,
    location: &mut MiningLocation,
    risk_multiplier: f64,
    market: &MarketEngine,
    catalog: &MineralCatalog,
    now: i64,
    rng: &mut impl Rng,
) -> Result<MineResult, EngineError> {
    if !risk_multiplier.is_finite()
        || !(MIN_RISK_MULTIPLIER..=MAX_RISK_MULTIPLIER).contains(&risk_multiplier)
    {
        return Err(EngineError::InvalidRisk(risk_multiplier));
    }
    if !player.is_location_unlocked(&location.id) {
        return Err(EngineError::LocationLocked(location.id.clone()));
    }

    // Resolve the eligible pool up front: a catalog hole is a collaborator
    // failure and must not leave partial mutation behind.
    let mut eligible: Vec<&Mineral> = Vec::with_capacity(location.minerals.len());
    for mineral_id in &location.minerals {
        let mineral = catalog
            .get(mineral_id)
            .ok_or_else(|| EngineError::UnknownMineral(mineral_id.clone()))?;
        eligible.push(mineral);
    }
    // Designed fallback, not error suppression: an empty pool falls back to
    // every Common mineral the catalog knows.
    if eligible.is_empty() {
        eligible = catalog.by_rarity(Rarity::Common);
    }

    let mods: OperationModifiers = aggregate(player, location);
    let rate = resolve_success_rate(location.danger_level, mods.success_delta, risk_multiplier);

    let mut applied = AppliedModifiers {
        base_success_rate: BASE_SUCCESS_RATE,
        danger_bonus: (6.0 - f64::from(location.danger_level)) * DANGER_BONUS_STEP,
        modifier_delta: mods.success_delta,
        unscaled_success_rate: rate.unscaled,
        success_rate: rate.resolved,
        risk_penalty_applied: rate.penalty_applied,
        risk_multiplier,
        stamina_mult: mods.stamina_mult,
        market_multiplier: 1.0,
        location_bonus: 1.0,
        value_bonus: mods.value_bonus,
    };

    let stamina_cost = (location.stamina_cost_factor
        * STAMINA_COST_BASE
        * risk_multiplier
        * mods.stamina_mult)
        .round() as u32;

    // Precondition: not enough stamina costs nothing, mutates nothing.
    if player.stamina < stamina_cost {
        return Ok(MineResult::failed(
            FailureReason::InsufficientStamina,
            "Too exhausted to run the drill.".to_string(),
            0,
            0,
            applied,
        ));
    }

    player.spend_stamina(stamina_cost);
    location.record_visit(now);

    let success = rng.gen::<f64>() < rate.resolved;
    if !success {
        let flavor = FAILURE_FLAVOR_TEXTS[rng.gen_range(0..FAILURE_FLAVOR_TEXTS.len())];
        let consolation = rng.gen_range(CONSOLATION_XP_MIN..=CONSOLATION_XP_MAX);
        player.record_mine_failure();
        shift_weather(location, rng);
        return Ok(MineResult::failed(
            FailureReason::MissedStrike,
            flavor.to_string(),
            consolation,
            stamina_cost,
            applied,
        ));
    }

    let Some(mineral) = select_mineral(&eligible, risk_multiplier, mods.rare_bonus, rng) else {
        // Catalog without a single Common mineral: nothing to extract.
        player.record_mine_failure();
        shift_weather(location, rng);
        return Ok(MineResult::failed(
            FailureReason::NoEligibleMineral,
            "The deposit is barren.".to_string(),
            0,
            stamina_cost,
            applied,
        ));
    };

    let market_multiplier = market.price_or_default(mineral.id);
    let location_bonus = location.bonus_for(mineral.id);
    applied.market_multiplier = market_multiplier;
    applied.location_bonus = location_bonus;

    let mut value = mineral.base_value as f64
        * market_multiplier
        * location_bonus
        * risk_multiplier
        * (1.0 + mods.value_bonus);

    let bonus_chance =
        BONUS_DISCOVERY_BASE_CHANCE * risk_multiplier + mods.bonus_discovery_bonus;
    let bonus_discovery = if rng.gen::<f64>() < bonus_chance {
        value *= BONUS_DISCOVERY_VALUE_MULT;
        let text = BONUS_DISCOVERY_TEXTS[rng.gen_range(0..BONUS_DISCOVERY_TEXTS.len())];
        Some(text.to_string())
    } else {
        None
    };

    let value = value.round() as u64;
    let experience = experience_for(mineral.rarity, value, risk_multiplier);

    player.add_minerals(mineral.id, 1);
    player.add_earnings(value);
    player.record_mine_success(value);
    location.record_discovery(mineral.id);
    shift_weather(location, rng);

    log::debug!(
        "{} mined {} at {} for {} ({} XP)",
        player.name,
        mineral.id,
        location.id,
        value,
        experience
    );

    Ok(MineResult {
        success: true,
        failure: None,
        message: format!("Struck {}!", mineral.name),
        mineral_id: Some(mineral.id.to_string()),
        rarity: Some(mineral.rarity),
        value,
        experience,
        bonus_discovery,
        stamina_spent: stamina_cost,
        modifiers: applied,
    })
}

/// Conditions drift between visits.
fn shift_weather(location: &mut MiningLocation, rng: &mut impl Rng) {
    if rng.gen::<f64>() < WEATHER_SHIFT_CHANCE {
        location.weather = roll_weather(rng);
    }
}
