//! Static mineral definitions and class membership tables.

use super::types::{Mineral, MineralClass, Rarity};

/// All minerals in the standard catalog, ascending by rarity tier.
pub const ALL_MINERALS: &[Mineral] = &[
    // ── Common ──────────────────────────────────────────────────────
    Mineral {
        id: "ferrite",
        name: "Ferrite Ore",
        base_value: 10,
        refined_value: 25,
        rarity: Rarity::Common,
        weight_kg: 4.0,
        radioactive: false,
        magnetic: false,
        legendary: false,
    },
    Mineral {
        id: "silica",
        name: "Silica Chunk",
        base_value: 8,
        refined_value: 20,
        rarity: Rarity::Common,
        weight_kg: 2.5,
        radioactive: false,
        magnetic: false,
        legendary: false,
    },
    Mineral {
        id: "graphite",
        name: "Graphite Vein",
        base_value: 12,
        refined_value: 30,
        rarity: Rarity::Common,
        weight_kg: 2.0,
        radioactive: false,
        magnetic: false,
        legendary: false,
    },
    // ── Uncommon ────────────────────────────────────────────────────
    Mineral {
        id: "copper",
        name: "Copper Lode",
        base_value: 25,
        refined_value: 65,
        rarity: Rarity::Uncommon,
        weight_kg: 5.5,
        radioactive: false,
        magnetic: false,
        legendary: false,
    },
    Mineral {
        id: "magnetite",
        name: "Magnetite Cluster",
        base_value: 30,
        refined_value: 80,
        rarity: Rarity::Uncommon,
        weight_kg: 6.0,
        radioactive: false,
        magnetic: true,
        legendary: false,
    },
    Mineral {
        id: "cobalt",
        name: "Cobalt Seam",
        base_value: 40,
        refined_value: 100,
        rarity: Rarity::Uncommon,
        weight_kg: 4.5,
        radioactive: false,
        magnetic: false,
        legendary: false,
    },
    // ── Rare ────────────────────────────────────────────────────────
    Mineral {
        id: "titanium",
        name: "Titanium Vein",
        base_value: 90,
        refined_value: 230,
        rarity: Rarity::Rare,
        weight_kg: 3.0,
        radioactive: false,
        magnetic: false,
        legendary: false,
    },
    Mineral {
        id: "silver",
        name: "Silver Filament",
        base_value: 120,
        refined_value: 300,
        rarity: Rarity::Rare,
        weight_kg: 7.0,
        radioactive: false,
        magnetic: false,
        legendary: false,
    },
    Mineral {
        id: "uranium",
        name: "Uranium Pocket",
        base_value: 150,
        refined_value: 400,
        rarity: Rarity::Rare,
        weight_kg: 12.0,
        radioactive: true,
        magnetic: false,
        legendary: false,
    },
    // ── Epic ────────────────────────────────────────────────────────
    Mineral {
        id: "gold",
        name: "Gold Deposit",
        base_value: 300,
        refined_value: 750,
        rarity: Rarity::Epic,
        weight_kg: 12.5,
        radioactive: false,
        magnetic: false,
        legendary: false,
    },
    Mineral {
        id: "thorium",
        name: "Thorium Core",
        base_value: 350,
        refined_value: 900,
        rarity: Rarity::Epic,
        weight_kg: 10.0,
        radioactive: true,
        magnetic: false,
        legendary: false,
    },
    Mineral {
        id: "iridium",
        name: "Iridium Knot",
        base_value: 450,
        refined_value: 1_150,
        rarity: Rarity::Epic,
        weight_kg: 14.0,
        radioactive: false,
        magnetic: false,
        legendary: false,
    },
    // ── Legendary ───────────────────────────────────────────────────
    Mineral {
        id: "void-opal",
        name: "Void Opal",
        base_value: 1_200,
        refined_value: 3_000,
        rarity: Rarity::Legendary,
        weight_kg: 1.5,
        radioactive: false,
        magnetic: false,
        legendary: false,
    },
    Mineral {
        id: "stellar-diamond",
        name: "Stellar Diamond",
        base_value: 2_000,
        refined_value: 5_200,
        rarity: Rarity::Legendary,
        weight_kg: 0.8,
        radioactive: false,
        magnetic: false,
        legendary: true,
    },
    // ── Mythic ──────────────────────────────────────────────────────
    Mineral {
        id: "dark-matter-shard",
        name: "Dark Matter Shard",
        base_value: 8_000,
        refined_value: 21_000,
        rarity: Rarity::Mythic,
        weight_kg: 0.1,
        radioactive: true,
        magnetic: false,
        legendary: false,
    },
    Mineral {
        id: "neutronium",
        name: "Neutronium Fragment",
        base_value: 12_000,
        refined_value: 32_000,
        rarity: Rarity::Mythic,
        weight_kg: 90.0,
        radioactive: false,
        magnetic: true,
        legendary: true,
    },
    // ── Quantum ─────────────────────────────────────────────────────
    Mineral {
        id: "quantum-crystal",
        name: "Quantum Crystal",
        base_value: 50_000,
        refined_value: 140_000,
        rarity: Rarity::Quantum,
        weight_kg: 0.05,
        radioactive: false,
        magnetic: false,
        legendary: true,
    },
];

// Fixed id -> class membership tables for achievement checks.
const RADIOACTIVE_MINERALS: &[&str] = &["uranium", "thorium", "dark-matter-shard"];
const MAGNETIC_MINERALS: &[&str] = &["magnetite", "neutronium"];
const LEGENDARY_MINERALS: &[&str] = &["stellar-diamond", "neutronium", "quantum-crystal"];
const QUANTUM_MINERALS: &[&str] = &["quantum-crystal"];

/// Mineral ids belonging to a special-property class.
pub fn class_members(class: MineralClass) -> &'static [&'static str] {
    match class {
        MineralClass::Radioactive => RADIOACTIVE_MINERALS,
        MineralClass::Magnetic => MAGNETIC_MINERALS,
        MineralClass::Legendary => LEGENDARY_MINERALS,
        MineralClass::Quantum => QUANTUM_MINERALS,
    }
}
