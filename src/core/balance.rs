//! Shared balance formulas used by the resolver, progression, and simulator.
//!
//! All core balance numbers live here or in `constants.rs`.
//! Change once, test everywhere.

use crate::minerals::Rarity;

// =============================================================================
// LEVELING
// =============================================================================

/// Base XP required for level 2.
pub const XP_CURVE_BASE: f64 = 1000.0;

/// Geometric growth factor per level.
/// XP to clear level N = XP_CURVE_BASE * XP_CURVE_GROWTH^(N - 1)
pub const XP_CURVE_GROWTH: f64 = 1.1;

/// XP required to advance past a given level.
pub fn xp_required_for_level(level: u32) -> u64 {
    (XP_CURVE_BASE * XP_CURVE_GROWTH.powf(level.saturating_sub(1) as f64)).round() as u64
}

/// Skill points granted on reaching a level.
/// Every 10th level is a major milestone, every 5th a minor one.
pub fn skill_points_for_level(level: u32) -> u32 {
    if level % 10 == 0 {
        3
    } else if level % 5 == 0 {
        2
    } else {
        1
    }
}

// =============================================================================
// RANKS
// =============================================================================

/// A rank band: reaching `min_level` grants the title.
#[derive(Debug, Clone, Copy)]
pub struct RankBand {
    pub name: &'static str,
    pub min_level: u32,
}

/// Ordered, non-overlapping rank bands. Index into this table is the rank.
pub const RANKS: &[RankBand] = &[
    RankBand { name: "Greenhorn", min_level: 1 },
    RankBand { name: "Prospector", min_level: 5 },
    RankBand { name: "Excavator", min_level: 10 },
    RankBand { name: "Drill Foreman", min_level: 18 },
    RankBand { name: "Deep Core Specialist", min_level: 28 },
    RankBand { name: "Veteran Extractor", min_level: 40 },
    RankBand { name: "Master Prospector", min_level: 55 },
    RankBand { name: "Quantum Baron", min_level: 75 },
];

/// Rank index for a level (highest band whose threshold is met).
pub fn rank_for_level(level: u32) -> usize {
    RANKS
        .iter()
        .rposition(|band| level >= band.min_level)
        .unwrap_or(0)
}

/// Display name for a rank index. Out-of-range indexes clamp to the top band.
pub fn rank_name(rank: usize) -> &'static str {
    RANKS[rank.min(RANKS.len() - 1)].name
}

// =============================================================================
// RARITY-DERIVED TABLES
// =============================================================================

/// Base XP granted per mined rarity tier (Common .. Quantum).
const BASE_XP_BY_RARITY: [u32; 7] = [10, 20, 35, 60, 100, 160, 250];

/// Per-tick market volatility per rarity tier (Common .. Quantum).
/// Rarer minerals trade thinner and swing harder.
const VOLATILITY_BY_RARITY: [f64; 7] = [0.05, 0.08, 0.12, 0.18, 0.25, 0.33, 0.45];

/// Base XP for mining a mineral of the given rarity.
pub fn base_xp_for_rarity(rarity: Rarity) -> u32 {
    BASE_XP_BY_RARITY[rarity.tier() as usize - 1]
}

/// Market volatility for a mineral of the given rarity.
pub fn volatility_for_rarity(rarity: Rarity) -> f64 {
    VOLATILITY_BY_RARITY[rarity.tier() as usize - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_curve_exact_values() {
        // Level 1: 1000 * 1.1^0 = 1000
        assert_eq!(xp_required_for_level(1), 1000);
        // Level 11: 1000 * 1.1^10, rounded
        let expected = (1000.0 * 1.1f64.powf(10.0)).round() as u64;
        assert_eq!(xp_required_for_level(11), expected);
        assert_eq!(xp_required_for_level(11), 2594);
    }

    #[test]
    fn test_xp_curve_monotonic() {
        for level in 1..100 {
            assert!(
                xp_required_for_level(level + 1) > xp_required_for_level(level),
                "XP curve must grow at level {}",
                level
            );
        }
    }

    #[test]
    fn test_skill_points_milestones() {
        assert_eq!(skill_points_for_level(2), 1);
        assert_eq!(skill_points_for_level(5), 2);
        assert_eq!(skill_points_for_level(10), 3);
        assert_eq!(skill_points_for_level(15), 2);
        assert_eq!(skill_points_for_level(20), 3);
        assert_eq!(skill_points_for_level(33), 1);
    }

    #[test]
    fn test_rank_for_level_bands() {
        assert_eq!(rank_for_level(1), 0);
        assert_eq!(rank_for_level(4), 0);
        assert_eq!(rank_for_level(5), 1);
        assert_eq!(rank_for_level(10), 2);
        assert_eq!(rank_for_level(27), 3);
        assert_eq!(rank_for_level(28), 4);
        assert_eq!(rank_for_level(75), 7);
        assert_eq!(rank_for_level(200), 7);
    }

    #[test]
    fn test_rank_names() {
        assert_eq!(rank_name(0), "Greenhorn");
        assert_eq!(rank_name(7), "Quantum Baron");
        // Out-of-range clamps rather than panicking
        assert_eq!(rank_name(99), "Quantum Baron");
    }

    #[test]
    fn test_rarity_tables_cover_all_tiers() {
        for rarity in Rarity::ALL {
            assert!(base_xp_for_rarity(rarity) > 0);
            let vol = volatility_for_rarity(rarity);
            assert!((0.0..=1.0).contains(&vol));
        }
        assert_eq!(base_xp_for_rarity(Rarity::Common), 10);
        assert_eq!(base_xp_for_rarity(Rarity::Quantum), 250);
    }
}
