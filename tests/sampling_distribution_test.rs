//! Statistical test: rarity-weighted mineral sampling.
//!
//! Over a large number of seeded draws the empirical selection frequency of
//! every mineral must converge to weight(m) / total weight.

use deepcore::minerals::{Mineral, MineralCatalog, Rarity};
use deepcore::mining::{sampling_weight, select_mineral};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

const DRAWS: u64 = 100_000;
const TOLERANCE: f64 = 0.01;

fn empirical_frequencies(
    eligible: &[&Mineral],
    risk: f64,
    seed: u64,
) -> HashMap<String, f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut counts: HashMap<String, u64> = HashMap::new();
    for _ in 0..DRAWS {
        let mineral = select_mineral(eligible, risk, 0.0, &mut rng)
            .expect("non-empty pool always selects");
        *counts.entry(mineral.id.to_string()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(id, n)| (id, n as f64 / DRAWS as f64))
        .collect()
}

#[test]
fn sampling_converges_to_theoretical_weights_at_neutral_risk() {
    let catalog = MineralCatalog::standard();
    let eligible: Vec<&Mineral> = catalog.iter().collect();
    let total: f64 = eligible
        .iter()
        .map(|m| sampling_weight(m, 1.0, 0.0))
        .sum();

    let frequencies = empirical_frequencies(&eligible, 1.0, 2024);
    for mineral in &eligible {
        let expected = sampling_weight(mineral, 1.0, 0.0) / total;
        let actual = frequencies.get(mineral.id).copied().unwrap_or(0.0);
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "{}: expected {:.4}, observed {:.4}",
            mineral.id,
            expected,
            actual
        );
    }
}

#[test]
fn sampling_converges_at_high_risk() {
    let catalog = MineralCatalog::standard();
    let eligible: Vec<&Mineral> = catalog.iter().collect();
    let total: f64 = eligible
        .iter()
        .map(|m| sampling_weight(m, 2.5, 0.0))
        .sum();

    let frequencies = empirical_frequencies(&eligible, 2.5, 4096);
    for mineral in &eligible {
        let expected = sampling_weight(mineral, 2.5, 0.0) / total;
        let actual = frequencies.get(mineral.id).copied().unwrap_or(0.0);
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "{}: expected {:.4}, observed {:.4}",
            mineral.id,
            expected,
            actual
        );
    }
}

#[test]
fn higher_risk_shifts_mass_toward_rare_tiers() {
    let catalog = MineralCatalog::standard();
    let eligible: Vec<&Mineral> = catalog.iter().collect();

    let low = empirical_frequencies(&eligible, 0.5, 11);
    let high = empirical_frequencies(&eligible, 3.0, 11);

    let rare_mass = |freqs: &HashMap<String, f64>| -> f64 {
        eligible
            .iter()
            .filter(|m| m.rarity >= Rarity::Legendary)
            .map(|m| freqs.get(m.id).copied().unwrap_or(0.0))
            .sum()
    };

    let low_mass = rare_mass(&low);
    let high_mass = rare_mass(&high);
    assert!(
        high_mass > low_mass * 10.0,
        "risk 3.0 should multiply rare-tier mass: {:.5} -> {:.5}",
        low_mass,
        high_mass
    );
}

#[test]
fn single_entry_pool_always_selects_it() {
    let catalog = MineralCatalog::standard();
    let ferrite = catalog.get("ferrite").unwrap();
    let pool = [ferrite];
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..1_000 {
        assert_eq!(
            select_mineral(&pool, 3.0, 0.0, &mut rng).unwrap().id,
            "ferrite"
        );
    }
}

#[test]
fn empty_pool_selects_nothing() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    assert!(select_mineral(&[], 1.0, 0.0, &mut rng).is_none());
}
