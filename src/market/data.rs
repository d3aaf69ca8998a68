//! Fixed market event template catalogs.
//!
//! Multipliers scale the per-tick price swing of the affected minerals, so
//! every template reads as a turbulence source for its commodity group.

use super::types::{EventKind, EventTemplate};

/// Economic events: broad, moderate turbulence. Rolled at 10% per tick.
pub const ECONOMIC_EVENT_TEMPLATES: &[EventTemplate] = &[
    EventTemplate {
        name: "Hull Alloy Procurement Frenzy",
        kind: EventKind::Economic,
        affected: &[("ferrite", 2.0), ("titanium", 2.5), ("cobalt", 1.8)],
        duration_secs: 1_800,
    },
    EventTemplate {
        name: "Orbital Fabricator Strike",
        kind: EventKind::Economic,
        affected: &[("copper", 2.2), ("silica", 1.6), ("graphite", 1.6)],
        duration_secs: 1_200,
    },
    EventTemplate {
        name: "Reactor Fuel Rationing",
        kind: EventKind::Economic,
        affected: &[("uranium", 2.8), ("thorium", 2.4)],
        duration_secs: 1_800,
    },
    EventTemplate {
        name: "Luxury Goods Speculation",
        kind: EventKind::Economic,
        affected: &[("gold", 2.0), ("silver", 2.0), ("void-opal", 1.8)],
        duration_secs: 2_400,
    },
    EventTemplate {
        name: "Sector-Wide Trade Lull",
        kind: EventKind::Economic,
        affected: &[
            ("ferrite", 0.5),
            ("silica", 0.5),
            ("graphite", 0.5),
            ("copper", 0.5),
        ],
        duration_secs: 1_200,
    },
];

/// Special events: rare, violent single-commodity disruptions.
/// Rolled at 5% per tick.
pub const SPECIAL_EVENT_TEMPLATES: &[EventTemplate] = &[
    EventTemplate {
        name: "Quantum Containment Breach",
        kind: EventKind::Special,
        affected: &[("quantum-crystal", 4.0), ("dark-matter-shard", 3.0)],
        duration_secs: 900,
    },
    EventTemplate {
        name: "Neutron Star Survey Results",
        kind: EventKind::Special,
        affected: &[("neutronium", 3.5), ("stellar-diamond", 2.5)],
        duration_secs: 1_200,
    },
    EventTemplate {
        name: "Magnetic Storm Season",
        kind: EventKind::Special,
        affected: &[("magnetite", 3.0), ("neutronium", 2.0)],
        duration_secs: 1_500,
    },
    EventTemplate {
        name: "Iridium Futures Panic",
        kind: EventKind::Special,
        affected: &[("iridium", 3.2)],
        duration_secs: 900,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minerals::MineralCatalog;

    #[test]
    fn test_templates_reference_known_minerals() {
        let catalog = MineralCatalog::standard();
        for template in ECONOMIC_EVENT_TEMPLATES
            .iter()
            .chain(SPECIAL_EVENT_TEMPLATES)
        {
            assert!(!template.affected.is_empty(), "{}", template.name);
            assert!(template.duration_secs > 0, "{}", template.name);
            for (mineral_id, mult) in template.affected {
                assert!(
                    catalog.contains(mineral_id),
                    "{} affects unknown mineral {}",
                    template.name,
                    mineral_id
                );
                assert!(*mult > 0.0);
            }
        }
    }

    #[test]
    fn test_template_kinds_match_their_catalog() {
        assert!(ECONOMIC_EVENT_TEMPLATES
            .iter()
            .all(|t| t.kind == EventKind::Economic));
        assert!(SPECIAL_EVENT_TEMPLATES
            .iter()
            .all(|t| t.kind == EventKind::Special));
    }
}
