//! Modifier aggregation.
//!
//! Folds location, equipment, skill, and weather effects into the scalar
//! bundle the resolver consumes. Pure function of player + location state.

use crate::equipment;
use crate::locations::MiningLocation;
use crate::player::Player;
use crate::skills;
use crate::weather;

/// Combined multipliers for one mining operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationModifiers {
    /// Additive success-rate delta (location modifier + skills + equipment
    /// + weather). The danger-level term is not included here; the
    /// resolver computes it as its own named term.
    pub success_delta: f64,
    /// Additive mined-value bonus; the resolver applies `1 + value_bonus`.
    pub value_bonus: f64,
    /// Multiplier on stamina cost.
    pub stamina_mult: f64,
    /// Additive bonus-discovery chance on top of the risk-scaled base.
    pub bonus_discovery_bonus: f64,
    /// Extra sampling weight on Legendary-and-above tiers.
    pub rare_bonus: f64,
}

impl Default for OperationModifiers {
    fn default() -> Self {
        Self {
            success_delta: 0.0,
            value_bonus: 0.0,
            stamina_mult: 1.0,
            bonus_discovery_bonus: 0.0,
            rare_bonus: 0.0,
        }
    }
}

/// Aggregates every modifier source for an operation at `location`.
pub fn aggregate(player: &Player, location: &MiningLocation) -> OperationModifiers {
    let mut mods = OperationModifiers {
        success_delta: location.success_modifier,
        ..OperationModifiers::default()
    };

    for skill_id in &player.unlocked_skills {
        if let Some(skill) = skills::get_skill(skill_id) {
            mods.success_delta += skill.effect.success_bonus;
            mods.value_bonus += skill.effect.value_bonus;
            mods.stamina_mult *= skill.effect.stamina_mult;
            mods.bonus_discovery_bonus += skill.effect.bonus_discovery_bonus;
            mods.rare_bonus += skill.effect.rare_bonus;
        }
    }

    for item_id in &player.equipped_items {
        if let Some(item) = equipment::get_item(item_id) {
            mods.success_delta += item.success_bonus;
            mods.value_bonus += item.value_bonus;
            mods.stamina_mult *= item.stamina_mult;
            mods.bonus_discovery_bonus += item.bonus_discovery_bonus;
        }
    }

    let weather_mods = weather::modifiers_for(location.weather);
    mods.success_delta += weather_mods.success_delta;
    mods.value_bonus += weather_mods.value_mult - 1.0;
    mods.stamina_mult *= weather_mods.stamina_mult;
    mods.rare_bonus += weather_mods.rare_bonus;

    mods
}
