//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId, AchievementKind};
use crate::minerals::MineralClass;

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ── Operation counts ────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::FirstStrike,
        name: "First Strike",
        description: "Run your first mining operation",
        kind: AchievementKind::TotalMines,
        target: 1,
        reward_money: 100,
        reward_skill_points: 1,
    },
    AchievementDef {
        id: AchievementId::DiggerI,
        name: "Digger I",
        description: "Run 50 mining operations",
        kind: AchievementKind::TotalMines,
        target: 50,
        reward_money: 500,
        reward_skill_points: 2,
    },
    AchievementDef {
        id: AchievementId::DiggerII,
        name: "Digger II",
        description: "Run 500 mining operations",
        kind: AchievementKind::TotalMines,
        target: 500,
        reward_money: 5_000,
        reward_skill_points: 3,
    },
    AchievementDef {
        id: AchievementId::DiggerIII,
        name: "Digger III",
        description: "Run 5,000 mining operations",
        kind: AchievementKind::TotalMines,
        target: 5_000,
        reward_money: 50_000,
        reward_skill_points: 5,
    },
    // ── Lifetime earnings ───────────────────────────────────────────
    AchievementDef {
        id: AchievementId::MagnateI,
        name: "Magnate I",
        description: "Earn 10,000 credits",
        kind: AchievementKind::TotalMoney,
        target: 10_000,
        reward_money: 1_000,
        reward_skill_points: 1,
    },
    AchievementDef {
        id: AchievementId::MagnateII,
        name: "Magnate II",
        description: "Earn 250,000 credits",
        kind: AchievementKind::TotalMoney,
        target: 250_000,
        reward_money: 10_000,
        reward_skill_points: 3,
    },
    AchievementDef {
        id: AchievementId::MagnateIII,
        name: "Magnate III",
        description: "Earn 5,000,000 credits",
        kind: AchievementKind::TotalMoney,
        target: 5_000_000,
        reward_money: 100_000,
        reward_skill_points: 5,
    },
    // ── Streaks ─────────────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::HotStreakI,
        name: "Hot Streak I",
        description: "5 successful operations in a row",
        kind: AchievementKind::ConsecutiveSuccess,
        target: 5,
        reward_money: 250,
        reward_skill_points: 1,
    },
    AchievementDef {
        id: AchievementId::HotStreakII,
        name: "Hot Streak II",
        description: "15 successful operations in a row",
        kind: AchievementKind::ConsecutiveSuccess,
        target: 15,
        reward_money: 2_500,
        reward_skill_points: 3,
    },
    AchievementDef {
        id: AchievementId::Unbreakable,
        name: "Unbreakable",
        description: "30 successful operations in a row",
        kind: AchievementKind::ConsecutiveSuccess,
        target: 30,
        reward_money: 25_000,
        reward_skill_points: 5,
    },
    // ── Rank milestones ─────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::RankExcavator,
        name: "Excavator",
        description: "Reach the Excavator rank",
        kind: AchievementKind::RankAdvancement,
        target: 2,
        reward_money: 1_000,
        reward_skill_points: 1,
    },
    AchievementDef {
        id: AchievementId::RankSpecialist,
        name: "Deep Core Specialist",
        description: "Reach the Deep Core Specialist rank",
        kind: AchievementKind::RankAdvancement,
        target: 4,
        reward_money: 10_000,
        reward_skill_points: 2,
    },
    AchievementDef {
        id: AchievementId::RankMaster,
        name: "Master Prospector",
        description: "Reach the Master Prospector rank",
        kind: AchievementKind::RankAdvancement,
        target: 6,
        reward_money: 50_000,
        reward_skill_points: 3,
    },
    AchievementDef {
        id: AchievementId::RankBaron,
        name: "Quantum Baron",
        description: "Reach the Quantum Baron rank",
        kind: AchievementKind::RankAdvancement,
        target: 7,
        reward_money: 250_000,
        reward_skill_points: 5,
    },
    // ── Skill points ────────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::ScholarI,
        name: "Scholar I",
        description: "Earn 10 skill points",
        kind: AchievementKind::SkillPoints,
        target: 10,
        reward_money: 1_000,
        reward_skill_points: 0,
    },
    AchievementDef {
        id: AchievementId::ScholarII,
        name: "Scholar II",
        description: "Earn 50 skill points",
        kind: AchievementKind::SkillPoints,
        target: 50,
        reward_money: 10_000,
        reward_skill_points: 0,
    },
    // ── Exploration ─────────────────────────────────────────────────
    AchievementDef {
        id: AchievementId::TrailblazerI,
        name: "Trailblazer I",
        description: "Unlock 3 mining locations",
        kind: AchievementKind::LocationUnlock,
        target: 3,
        reward_money: 2_000,
        reward_skill_points: 1,
    },
    AchievementDef {
        id: AchievementId::TrailblazerII,
        name: "Trailblazer II",
        description: "Unlock all 6 mining locations",
        kind: AchievementKind::LocationUnlock,
        target: 6,
        reward_money: 20_000,
        reward_skill_points: 3,
    },
    // ── Mineral collections ─────────────────────────────────────────
    AchievementDef {
        id: AchievementId::GeigerCollector,
        name: "Geiger Collector",
        description: "Hold 25 units of radioactive minerals",
        kind: AchievementKind::SpecificMineral(MineralClass::Radioactive),
        target: 25,
        reward_money: 5_000,
        reward_skill_points: 2,
    },
    AchievementDef {
        id: AchievementId::FieldHarvester,
        name: "Field Harvester",
        description: "Hold 25 units of magnetic minerals",
        kind: AchievementKind::SpecificMineral(MineralClass::Magnetic),
        target: 25,
        reward_money: 5_000,
        reward_skill_points: 2,
    },
    AchievementDef {
        id: AchievementId::RelicHunter,
        name: "Relic Hunter",
        description: "Hold 5 units of legendary minerals",
        kind: AchievementKind::SpecificMineral(MineralClass::Legendary),
        target: 5,
        reward_money: 25_000,
        reward_skill_points: 3,
    },
    AchievementDef {
        id: AchievementId::QuantumPioneer,
        name: "Quantum Pioneer",
        description: "Extract a quantum crystal",
        kind: AchievementKind::SpecificMineral(MineralClass::Quantum),
        target: 1,
        reward_money: 100_000,
        reward_skill_points: 5,
    },
    // ── Single-operation value ──────────────────────────────────────
    AchievementDef {
        id: AchievementId::JackpotI,
        name: "Jackpot I",
        description: "Clear 10,000 credits in one operation",
        kind: AchievementKind::BestSingleMine,
        target: 10_000,
        reward_money: 2_500,
        reward_skill_points: 1,
    },
    AchievementDef {
        id: AchievementId::JackpotII,
        name: "Jackpot II",
        description: "Clear 250,000 credits in one operation",
        kind: AchievementKind::BestSingleMine,
        target: 250_000,
        reward_money: 25_000,
        reward_skill_points: 3,
    },
];

/// Definition lookup.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for def in ALL_ACHIEVEMENTS {
            assert!(seen.insert(def.id), "duplicate id {:?}", def.id);
        }
    }

    #[test]
    fn test_targets_are_positive() {
        for def in ALL_ACHIEVEMENTS {
            assert!(def.target > 0, "{:?}", def.id);
        }
    }

    #[test]
    fn test_lookup() {
        let def = get_achievement_def(AchievementId::FirstStrike).unwrap();
        assert_eq!(def.target, 1);
        assert_eq!(def.kind, AchievementKind::TotalMines);
    }
}
