//! The achievement evaluator: one rule table over the closed game-event
//! vocabulary, driving progress updates and one-shot completion rewards.

use super::data::ALL_ACHIEVEMENTS;
use super::types::{
    AchievementCompletion, AchievementDef, AchievementKind, AchievementState, GameEvent,
};
use crate::minerals::class_members;
use crate::player::Player;

/// Current measured value for an achievement kind, read from player state.
fn progress_value(player: &Player, kind: AchievementKind) -> u64 {
    match kind {
        AchievementKind::TotalMines => player.total_mines,
        AchievementKind::TotalMoney => player.lifetime_earnings,
        AchievementKind::ConsecutiveSuccess => u64::from(player.consecutive_successes),
        AchievementKind::RankAdvancement => player.rank as u64,
        AchievementKind::SkillPoints => u64::from(player.lifetime_skill_points),
        AchievementKind::LocationUnlock => player.unlocked_locations.len() as u64,
        AchievementKind::SpecificMineral(class) => class_members(class)
            .iter()
            .map(|id| player.mineral_count(id))
            .sum(),
        AchievementKind::BestSingleMine => player.best_single_mine,
    }
}

/// Lifecycle state of one achievement for this player.
pub fn achievement_state(player: &Player, def: &AchievementDef) -> AchievementState {
    if player.completed_achievements.contains(&def.id) {
        AchievementState::Completed
    } else if player
        .achievement_progress
        .get(&def.id)
        .copied()
        .unwrap_or(0)
        > 0
    {
        AchievementState::InProgress
    } else {
        AchievementState::Locked
    }
}

/// Scans every not-yet-completed achievement against the event and the
/// player's current state.
///
/// Progress is monotonic non-decreasing for every kind except
/// `ConsecutiveSuccess`, which may regress when the event is a failed
/// operation. The first time progress reaches the target the achievement
/// completes: rewards are granted, the id is appended once, and a
/// completion record is returned for the host. Completed achievements are
/// never re-evaluated, so repeating an event is a no-op.
pub fn notify(player: &mut Player, event: &GameEvent) -> Vec<AchievementCompletion> {
    let mut completions = Vec::new();
    let streak_may_regress = matches!(event, GameEvent::MineCompleted { success: false });

    for def in ALL_ACHIEVEMENTS {
        if player.completed_achievements.contains(&def.id) {
            continue;
        }

        let measured = progress_value(player, def.kind);
        let stored = player
            .achievement_progress
            .get(&def.id)
            .copied()
            .unwrap_or(0);

        let updated = match def.kind {
            AchievementKind::ConsecutiveSuccess if streak_may_regress => measured,
            _ => stored.max(measured),
        };
        player.achievement_progress.insert(def.id, updated);

        if updated >= def.target {
            player.completed_achievements.push(def.id);
            log::info!("{} completed achievement: {}", player.name, def.name);
            completions.push(AchievementCompletion {
                id: def.id,
                name: def.name,
                reward_money: def.reward_money,
                reward_skill_points: def.reward_skill_points,
            });
        }
    }

    // Rewards land after the scan, so a money reward cannot reorder
    // progress evaluation within the same call. Cascades (a reward pushing
    // another achievement over its target) surface on the next notify.
    for completion in &completions {
        if completion.reward_money > 0 {
            player.add_earnings(completion.reward_money);
        }
        if completion.reward_skill_points > 0 {
            player.grant_skill_points(completion.reward_skill_points);
        }
    }

    completions
}
