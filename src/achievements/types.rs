//! Achievement system types.

use crate::minerals::MineralClass;
use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Operation counts
    FirstStrike,
    DiggerI,
    DiggerII,
    DiggerIII,
    // Lifetime earnings
    MagnateI,
    MagnateII,
    MagnateIII,
    // Consecutive successes
    HotStreakI,
    HotStreakII,
    Unbreakable,
    // Rank milestones
    RankExcavator,
    RankSpecialist,
    RankMaster,
    RankBaron,
    // Lifetime skill points
    ScholarI,
    ScholarII,
    // Unlocked locations
    TrailblazerI,
    TrailblazerII,
    // Special-property mineral collections
    GeigerCollector,
    FieldHarvester,
    RelicHunter,
    QuantumPioneer,
    // Single-operation value
    JackpotI,
    JackpotII,
}

/// How progress toward an achievement is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementKind {
    /// Total operations attempted.
    TotalMines,
    /// Lifetime earnings.
    TotalMoney,
    /// Current success streak. The only kind whose progress may regress,
    /// and only on a failed-operation event.
    ConsecutiveSuccess,
    /// Rank index reached.
    RankAdvancement,
    /// Skill points ever earned.
    SkillPoints,
    /// Locations unlocked.
    LocationUnlock,
    /// Units held across a special-property mineral class.
    SpecificMineral(MineralClass),
    /// Best single operation value.
    BestSingleMine,
}

/// Static definition of an achievement.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: AchievementKind,
    pub target: u64,
    pub reward_money: u64,
    pub reward_skill_points: u32,
}

/// Lifecycle of an achievement for one player. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementState {
    Locked,
    InProgress,
    Completed,
}

/// Emitted when an achievement completes, for host notification.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementCompletion {
    pub id: AchievementId,
    pub name: &'static str,
    pub reward_money: u64,
    pub reward_skill_points: u32,
}

/// The closed event vocabulary the host reports through `notify`.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// An operation resolved (either way).
    MineCompleted { success: bool },
    /// A mineral entered the inventory.
    MineralCollected { mineral_id: String },
    /// Money was credited from any source.
    MoneyEarned,
    /// The rank band changed.
    RankChanged,
    /// A skill purchase went through.
    SkillPurchased,
    /// A location was unlocked.
    LocationUnlocked,
}
