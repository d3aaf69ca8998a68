//! Experience application, level-ups, rank changes, and the location
//! unlocks that ride on them.

use crate::core::balance::{rank_for_level, rank_name, skill_points_for_level, xp_required_for_level};
use crate::locations::LocationCatalog;
use crate::player::Player;

/// What one `apply_progression` call changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressionReport {
    pub xp_applied: u32,
    pub levels_gained: u32,
    pub new_level: u32,
    pub skill_points_gained: u32,
    /// Set when the rank band changed.
    pub new_rank: Option<usize>,
    /// Locations auto-unlocked by the rank change.
    pub unlocked_locations: Vec<String>,
}

/// Adds experience and resolves every level threshold it crosses.
///
/// The threshold is recomputed each iteration, so one large award can jump
/// several levels in a single call. Each level grants its milestone skill
/// points; a rank-band change auto-unlocks every location whose required
/// rank is now met.
pub fn apply_progression(
    player: &mut Player,
    xp: u32,
    locations: &LocationCatalog,
) -> ProgressionReport {
    let mut report = ProgressionReport {
        xp_applied: xp,
        new_level: player.level,
        ..ProgressionReport::default()
    };

    player.experience += u64::from(xp);

    while player.experience >= xp_required_for_level(player.level) {
        player.experience -= xp_required_for_level(player.level);
        player.level += 1;
        report.levels_gained += 1;

        let points = skill_points_for_level(player.level);
        player.grant_skill_points(points);
        report.skill_points_gained += points;
        log::debug!("{} reached level {}", player.name, player.level);
    }
    report.new_level = player.level;

    let rank = rank_for_level(player.level);
    if rank != player.rank {
        player.rank = rank;
        report.new_rank = Some(rank);
        log::info!("{} advanced to {}", player.name, rank_name(rank));

        for location in locations.iter() {
            if location.required_rank <= rank && player.unlock_location(&location.id) {
                report.unlocked_locations.push(location.id.clone());
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::balance::RANKS;

    fn setup() -> (Player, LocationCatalog) {
        (Player::new("Vex".to_string(), 0), LocationCatalog::standard())
    }

    #[test]
    fn test_small_award_changes_nothing() {
        let (mut player, locations) = setup();
        let report = apply_progression(&mut player, 500, &locations);

        assert_eq!(report.levels_gained, 0);
        assert_eq!(report.new_level, 1);
        assert_eq!(report.new_rank, None);
        assert_eq!(player.level, 1);
        assert_eq!(player.experience, 500);
    }

    #[test]
    fn test_single_level_up() {
        let (mut player, locations) = setup();
        // Level 1 requires exactly 1000.
        let report = apply_progression(&mut player, 1_000, &locations);

        assert_eq!(report.levels_gained, 1);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
        assert_eq!(report.skill_points_gained, 1);
        assert_eq!(player.skill_points, 1);
    }

    #[test]
    fn test_excess_xp_carries_over() {
        let (mut player, locations) = setup();
        apply_progression(&mut player, 1_250, &locations);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 250);
    }

    #[test]
    fn test_double_level_jump_in_one_call() {
        let (mut player, locations) = setup();
        // Put the player at level 9, then cross two thresholds at once.
        // Level 9 -> 10 needs 1000 * 1.1^8, level 10 -> 11 needs 1000 * 1.1^9.
        for _ in 0..8 {
            let needed = xp_required_for_level(player.level) as u32;
            apply_progression(&mut player, needed, &locations);
        }
        assert_eq!(player.level, 9);
        let before_points = player.skill_points;

        let two_levels =
            (xp_required_for_level(9) + xp_required_for_level(10)) as u32;
        let report = apply_progression(&mut player, two_levels, &locations);

        assert_eq!(report.levels_gained, 2);
        assert_eq!(player.level, 11);
        assert_eq!(player.experience, 0);
        // Level 10 is a major milestone (+3), level 11 an ordinary one (+1).
        assert_eq!(report.skill_points_gained, 4);
        assert_eq!(player.skill_points, before_points + 4);
    }

    #[test]
    fn test_rank_change_unlocks_matching_locations() {
        let (mut player, locations) = setup();
        assert!(!player.is_location_unlocked("collapsed-shaft"));

        // Enough XP to clear levels 1-4 puts the player at level 5
        // (Prospector), which unlocks the rank-1 shaft.
        let to_level_5: u64 = (1..5).map(xp_required_for_level).sum();
        let report = apply_progression(&mut player, to_level_5 as u32, &locations);

        assert_eq!(player.level, 5);
        assert_eq!(report.new_rank, Some(1));
        assert_eq!(player.rank, 1);
        assert!(report.unlocked_locations.contains(&"collapsed-shaft".to_string()));
        assert!(player.is_location_unlocked("collapsed-shaft"));
        // Higher-rank locations stay locked.
        assert!(!player.is_location_unlocked("deep-fissure"));
    }

    #[test]
    fn test_skipped_ranks_still_unlock() {
        let (mut player, locations) = setup();
        // One absurd award straight to the top band.
        let to_level_80: u64 = (1..80).map(xp_required_for_level).sum();
        let report = apply_progression(&mut player, to_level_80 as u32, &locations);

        assert_eq!(player.rank, RANKS.len() - 1);
        assert_eq!(report.new_rank, Some(RANKS.len() - 1));
        // Every location, including the bands jumped over, is unlocked.
        for location in locations.iter() {
            assert!(
                player.is_location_unlocked(&location.id),
                "{} should be unlocked",
                location.id
            );
        }
    }

    #[test]
    fn test_unlock_does_not_duplicate() {
        let (mut player, locations) = setup();
        player.unlock_location("collapsed-shaft");

        let to_level_5: u64 = (1..5).map(xp_required_for_level).sum();
        let report = apply_progression(&mut player, to_level_5 as u32, &locations);

        assert!(!report.unlocked_locations.contains(&"collapsed-shaft".to_string()));
        assert_eq!(
            player
                .unlocked_locations
                .iter()
                .filter(|id| *id == "collapsed-shaft")
                .count(),
            1
        );
    }
}
