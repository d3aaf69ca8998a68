//! Purchasable skills and their operation effects.

use crate::errors::EngineError;
use crate::player::Player;

/// Passive effect bundle a skill contributes to every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillEffect {
    /// Additive success-rate delta.
    pub success_bonus: f64,
    /// Additive mined-value bonus (0.10 = +10%).
    pub value_bonus: f64,
    /// Multiplier on stamina cost (0.9 = 10% cheaper). 1.0 when unset.
    pub stamina_mult: f64,
    /// Additive bonus-discovery chance.
    pub bonus_discovery_bonus: f64,
    /// Extra sampling weight on Legendary-and-above tiers.
    pub rare_bonus: f64,
}

/// Static skill definition.
#[derive(Debug, Clone, Copy)]
pub struct SkillDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Cost in skill points.
    pub cost: u32,
    pub effect: SkillEffect,
}

const NEUTRAL_STAMINA: f64 = 1.0;

/// All purchasable skills.
pub const ALL_SKILLS: &[SkillDef] = &[
    SkillDef {
        id: "steady-hands",
        name: "Steady Hands",
        description: "Fewer botched drill starts",
        cost: 3,
        effect: SkillEffect {
            success_bonus: 0.03,
            value_bonus: 0.0,
            stamina_mult: NEUTRAL_STAMINA,
            bonus_discovery_bonus: 0.0,
            rare_bonus: 0.0,
        },
    },
    SkillDef {
        id: "geo-survey",
        name: "Geological Survey",
        description: "Read the strata before committing the bore",
        cost: 8,
        effect: SkillEffect {
            success_bonus: 0.05,
            value_bonus: 0.0,
            stamina_mult: NEUTRAL_STAMINA,
            bonus_discovery_bonus: 0.0,
            rare_bonus: 0.0,
        },
    },
    SkillDef {
        id: "keen-eye",
        name: "Keen Eye",
        description: "Spot secondary pockets other miners walk past",
        cost: 5,
        effect: SkillEffect {
            success_bonus: 0.0,
            value_bonus: 0.0,
            stamina_mult: NEUTRAL_STAMINA,
            bonus_discovery_bonus: 0.03,
            rare_bonus: 0.0,
        },
    },
    SkillDef {
        id: "lucky-streak",
        name: "Lucky Streak",
        description: "Bonus finds come looking for you",
        cost: 12,
        effect: SkillEffect {
            success_bonus: 0.0,
            value_bonus: 0.0,
            stamina_mult: NEUTRAL_STAMINA,
            bonus_discovery_bonus: 0.05,
            rare_bonus: 0.0,
        },
    },
    SkillDef {
        id: "appraisal",
        name: "Appraisal",
        description: "Grade ore on the spot for better payouts",
        cost: 6,
        effect: SkillEffect {
            success_bonus: 0.0,
            value_bonus: 0.10,
            stamina_mult: NEUTRAL_STAMINA,
            bonus_discovery_bonus: 0.0,
            rare_bonus: 0.0,
        },
    },
    SkillDef {
        id: "master-appraisal",
        name: "Master Appraisal",
        description: "Nothing leaves the pit undervalued",
        cost: 15,
        effect: SkillEffect {
            success_bonus: 0.0,
            value_bonus: 0.20,
            stamina_mult: NEUTRAL_STAMINA,
            bonus_discovery_bonus: 0.0,
            rare_bonus: 0.0,
        },
    },
    SkillDef {
        id: "endurance-training",
        name: "Endurance Training",
        description: "Longer shifts on the same legs",
        cost: 4,
        effect: SkillEffect {
            success_bonus: 0.0,
            value_bonus: 0.0,
            stamina_mult: 0.9,
            bonus_discovery_bonus: 0.0,
            rare_bonus: 0.0,
        },
    },
    SkillDef {
        id: "oxygen-recycler",
        name: "Oxygen Recycler Certification",
        description: "Run the rebreather loop twice as long",
        cost: 10,
        effect: SkillEffect {
            success_bonus: 0.0,
            value_bonus: 0.0,
            stamina_mult: 0.85,
            bonus_discovery_bonus: 0.0,
            rare_bonus: 0.0,
        },
    },
    SkillDef {
        id: "anomaly-sense",
        name: "Anomaly Sense",
        description: "The rarest seams hum if you know how to listen",
        cost: 20,
        effect: SkillEffect {
            success_bonus: 0.0,
            value_bonus: 0.0,
            stamina_mult: NEUTRAL_STAMINA,
            bonus_discovery_bonus: 0.0,
            rare_bonus: 0.25,
        },
    },
];

/// Skill definition lookup.
pub fn get_skill(id: &str) -> Option<&'static SkillDef> {
    ALL_SKILLS.iter().find(|s| s.id == id)
}

/// Spend skill points to unlock a skill.
///
/// Host errors (unknown id, already owned, not enough points) come back as
/// `EngineError`; on success the skill id is appended to the player's
/// unlocked set and the cost deducted.
pub fn purchase_skill(player: &mut Player, skill_id: &str) -> Result<&'static SkillDef, EngineError> {
    let skill = get_skill(skill_id).ok_or_else(|| EngineError::UnknownSkill(skill_id.to_string()))?;

    if player.has_skill(skill_id) {
        return Err(EngineError::SkillAlreadyOwned(skill_id.to_string()));
    }
    if player.skill_points < skill.cost {
        return Err(EngineError::InsufficientSkillPoints {
            needed: skill.cost,
            available: player.skill_points,
        });
    }

    player.skill_points -= skill.cost;
    player.unlocked_skills.push(skill_id.to_string());
    log::debug!("{} unlocked skill {}", player.name, skill.name);
    Ok(skill)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_player() -> Player {
        let mut player = Player::new("Vex".to_string(), 0);
        player.skill_points = 10;
        player
    }

    #[test]
    fn test_skill_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for skill in ALL_SKILLS {
            assert!(seen.insert(skill.id), "duplicate skill id {}", skill.id);
        }
    }

    #[test]
    fn test_purchase_deducts_points() {
        let mut player = test_player();
        let skill = purchase_skill(&mut player, "steady-hands").unwrap();
        assert_eq!(skill.cost, 3);
        assert_eq!(player.skill_points, 7);
        assert!(player.has_skill("steady-hands"));
    }

    #[test]
    fn test_purchase_rejects_duplicates() {
        let mut player = test_player();
        purchase_skill(&mut player, "steady-hands").unwrap();
        let err = purchase_skill(&mut player, "steady-hands").unwrap_err();
        assert!(matches!(err, EngineError::SkillAlreadyOwned(_)));
        assert_eq!(player.skill_points, 7);
    }

    #[test]
    fn test_purchase_rejects_unaffordable() {
        let mut player = test_player();
        let err = purchase_skill(&mut player, "anomaly-sense").unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientSkillPoints {
                needed: 20,
                available: 10
            }
        );
        assert!(!player.has_skill("anomaly-sense"));
    }

    #[test]
    fn test_purchase_rejects_unknown_skill() {
        let mut player = test_player();
        let err = purchase_skill(&mut player, "time-travel").unwrap_err();
        assert!(matches!(err, EngineError::UnknownSkill(_)));
    }
}
