//! Mineral catalog types.

use serde::{Deserialize, Serialize};

/// Rarity tier, ordinal 1 (Common) through 7 (Quantum).
/// Drives both selection weight and reward scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
    Quantum,
}

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 7] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
        Rarity::Quantum,
    ];

    /// Ordinal tier, 1-7.
    pub fn tier(self) -> u32 {
        self as u32 + 1
    }

    /// Display name for the tier.
    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::Quantum => "Quantum",
        }
    }
}

/// Immutable catalog entry for a mineral. Loaded once, never mutated at
/// runtime; live market state for the mineral is tracked separately in
/// `market::MarketData`.
#[derive(Debug, Clone)]
pub struct Mineral {
    pub id: &'static str,
    pub name: &'static str,
    /// Raw ore value in currency units.
    pub base_value: u64,
    /// Value after refining (not used by the resolver directly; sell paths
    /// and the simulator report both quote it).
    pub refined_value: u64,
    pub rarity: Rarity,
    /// Mass per unit, in kilograms.
    pub weight_kg: f64,
    pub radioactive: bool,
    pub magnetic: bool,
    pub legendary: bool,
}

/// Special-property classes used by achievement membership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MineralClass {
    Radioactive,
    Magnetic,
    Legendary,
    Quantum,
}

impl MineralClass {
    pub fn name(self) -> &'static str {
        match self {
            MineralClass::Radioactive => "Radioactive",
            MineralClass::Magnetic => "Magnetic",
            MineralClass::Legendary => "Legendary",
            MineralClass::Quantum => "Quantum",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_tiers_are_ordinal() {
        assert_eq!(Rarity::Common.tier(), 1);
        assert_eq!(Rarity::Quantum.tier(), 7);
        for window in Rarity::ALL.windows(2) {
            assert!(window[0].tier() + 1 == window[1].tier());
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_rarity_names() {
        assert_eq!(Rarity::Common.name(), "Common");
        assert_eq!(Rarity::Mythic.name(), "Mythic");
    }
}
