//! Default location catalog.

use super::types::MiningLocation;
use crate::weather::Weather;
use std::collections::HashMap;

fn location(
    id: &str,
    name: &str,
    danger_level: u8,
    depth_m: u32,
    success_modifier: f64,
    stamina_cost_factor: f64,
    required_rank: usize,
    minerals: &[&str],
    bonuses: &[(&str, f64)],
) -> MiningLocation {
    MiningLocation {
        id: id.to_string(),
        name: name.to_string(),
        danger_level,
        depth_m,
        success_modifier,
        stamina_cost_factor,
        required_rank,
        minerals: minerals.iter().map(|m| m.to_string()).collect(),
        mineral_bonuses: bonuses
            .iter()
            .map(|(m, b)| (m.to_string(), *b))
            .collect(),
        weather: Weather::Clear,
        visits: 0,
        last_visited: 0,
        discoveries: HashMap::new(),
    }
}

/// Returns all mining locations, ordered by required rank.
pub fn get_all_locations() -> Vec<MiningLocation> {
    vec![
        location(
            "surface-strip",
            "Surface Strip Mine",
            1,
            50,
            0.05,
            0.5,
            0,
            &["ferrite", "silica", "graphite", "copper"],
            &[],
        ),
        location(
            "collapsed-shaft",
            "Collapsed Shaft",
            2,
            220,
            0.02,
            0.8,
            1,
            &["ferrite", "graphite", "copper", "magnetite", "cobalt"],
            &[("magnetite", 1.2)],
        ),
        location(
            "deep-fissure",
            "Deep Core Fissure",
            3,
            800,
            0.0,
            1.0,
            2,
            &["cobalt", "titanium", "silver", "uranium", "gold"],
            &[("uranium", 1.3)],
        ),
        location(
            "magma-vents",
            "Magma Vent Fields",
            4,
            1_500,
            -0.02,
            1.3,
            4,
            &["titanium", "gold", "thorium", "iridium", "void-opal"],
            &[("iridium", 1.4)],
        ),
        location(
            "abyssal-trench",
            "Abyssal Trench",
            5,
            3_000,
            -0.05,
            1.6,
            5,
            &[
                "iridium",
                "void-opal",
                "stellar-diamond",
                "dark-matter-shard",
                "neutronium",
            ],
            &[("stellar-diamond", 1.5)],
        ),
        location(
            "quantum-rift",
            "Quantum Rift",
            5,
            9_999,
            -0.05,
            2.0,
            7,
            &["dark-matter-shard", "neutronium", "quantum-crystal"],
            &[("quantum-crystal", 2.0)],
        ),
    ]
}
