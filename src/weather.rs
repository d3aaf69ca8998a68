//! Weather conditions and their mining modifiers.
//!
//! Conditions are drawn from a weighted table and looked up in a modifier
//! table rather than matched inline, so the mapping stays data-driven.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Surface conditions at a mining location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Weather {
    #[default]
    Clear,
    DustStorm,
    SolarFlare,
    IonStorm,
    Aurora,
    SeismicTremor,
}

impl Weather {
    pub fn name(self) -> &'static str {
        match self {
            Weather::Clear => "Clear",
            Weather::DustStorm => "Dust Storm",
            Weather::SolarFlare => "Solar Flare",
            Weather::IonStorm => "Ion Storm",
            Weather::Aurora => "Aurora",
            Weather::SeismicTremor => "Seismic Tremor",
        }
    }
}

/// Numeric effects of a weather condition on a mining operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherModifiers {
    /// Additive success-rate delta.
    pub success_delta: f64,
    /// Multiplier on mined value.
    pub value_mult: f64,
    /// Multiplier on stamina cost.
    pub stamina_mult: f64,
    /// Extra sampling weight on Legendary-and-above tiers.
    pub rare_bonus: f64,
}

/// Per-condition roll weight and modifiers. Weights are out of the table
/// total; Clear dominates so that extreme conditions stay occasional.
const WEATHER_TABLE: &[(Weather, u32, WeatherModifiers)] = &[
    (
        Weather::Clear,
        40,
        WeatherModifiers {
            success_delta: 0.0,
            value_mult: 1.0,
            stamina_mult: 1.0,
            rare_bonus: 0.0,
        },
    ),
    (
        Weather::DustStorm,
        15,
        WeatherModifiers {
            success_delta: -0.08,
            value_mult: 1.0,
            stamina_mult: 1.25,
            rare_bonus: 0.0,
        },
    ),
    (
        Weather::SolarFlare,
        12,
        WeatherModifiers {
            success_delta: -0.05,
            value_mult: 1.15,
            stamina_mult: 1.1,
            rare_bonus: 0.10,
        },
    ),
    (
        Weather::IonStorm,
        8,
        WeatherModifiers {
            success_delta: -0.12,
            value_mult: 1.25,
            stamina_mult: 1.2,
            rare_bonus: 0.25,
        },
    ),
    (
        Weather::Aurora,
        15,
        WeatherModifiers {
            success_delta: 0.05,
            value_mult: 1.05,
            stamina_mult: 0.9,
            rare_bonus: 0.05,
        },
    ),
    (
        Weather::SeismicTremor,
        10,
        WeatherModifiers {
            success_delta: -0.10,
            value_mult: 1.1,
            stamina_mult: 1.3,
            rare_bonus: 0.15,
        },
    ),
];

/// Modifier lookup for a condition.
pub fn modifiers_for(weather: Weather) -> WeatherModifiers {
    WEATHER_TABLE
        .iter()
        .find(|(w, _, _)| *w == weather)
        .map(|(_, _, mods)| *mods)
        .unwrap_or(WeatherModifiers {
            success_delta: 0.0,
            value_mult: 1.0,
            stamina_mult: 1.0,
            rare_bonus: 0.0,
        })
}

/// Draw a condition from the weighted table.
pub fn roll_weather(rng: &mut impl Rng) -> Weather {
    let total: u32 = WEATHER_TABLE.iter().map(|(_, weight, _)| weight).sum();
    let mut roll = rng.gen_range(0..total);
    for (weather, weight, _) in WEATHER_TABLE {
        if roll < *weight {
            return *weather;
        }
        roll -= weight;
    }
    Weather::Clear
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_modifiers_for_every_condition() {
        for (weather, _, expected) in WEATHER_TABLE {
            assert_eq!(modifiers_for(*weather), *expected);
        }
    }

    #[test]
    fn test_clear_is_neutral() {
        let mods = modifiers_for(Weather::Clear);
        assert_eq!(mods.success_delta, 0.0);
        assert_eq!(mods.value_mult, 1.0);
        assert_eq!(mods.stamina_mult, 1.0);
        assert_eq!(mods.rare_bonus, 0.0);
    }

    #[test]
    fn test_roll_weather_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let trials = 20_000;
        let mut clear = 0u32;
        let mut seen = std::collections::HashSet::new();

        for _ in 0..trials {
            let weather = roll_weather(&mut rng);
            seen.insert(weather);
            if weather == Weather::Clear {
                clear += 1;
            }
        }

        // Clear carries 40/100 weight; allow a generous band.
        let rate = f64::from(clear) / f64::from(trials);
        assert!(
            (0.36..=0.44).contains(&rate),
            "Clear rate {} should be ~0.40",
            rate
        );
        // Every condition should appear in 20k rolls.
        assert_eq!(seen.len(), WEATHER_TABLE.len());
    }
}
