//! Simulation runner: drives full sessions through the real engine
//! operations, so simulated numbers match live behavior.

use super::config::SimConfig;
use super::report::{SessionStats, SimReport};
use crate::achievements::{notify, GameEvent};
use crate::locations::LocationCatalog;
use crate::market::MarketEngine;
use crate::minerals::MineralCatalog;
use crate::mining::{perform_operation, FailureReason};
use crate::player::Player;
use crate::progression::apply_progression;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return an aggregated report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut sessions = Vec::with_capacity(config.num_sessions as usize);

    for session_idx in 0..config.num_sessions {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + u64::from(session_idx)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_session(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Session {}/{} - level {}, {} credits, {}/{} successful",
                session_idx + 1,
                config.num_sessions,
                stats.final_level,
                stats.lifetime_earnings,
                stats.successes,
                stats.ops
            );
        }
        sessions.push(stats);
    }

    SimReport::from_sessions(config, sessions)
}

fn simulate_session(config: &SimConfig, rng: &mut impl Rng) -> SessionStats {
    let minerals = MineralCatalog::standard();
    let mut locations = LocationCatalog::standard();
    let market = MarketEngine::new(&minerals, 0);
    let mut player = Player::new("Sim Miner".to_string(), 0);
    let mut stats = SessionStats::default();
    let mut now = 0i64;

    for op in 0..config.ops_per_session {
        now += config.seconds_per_op;
        market.tick(now, rng);

        let location_id = player.current_location.clone();
        let Some(location) = locations.get_mut(&location_id) else {
            break;
        };

        let result = match perform_operation(
            &mut player,
            location,
            config.risk,
            &market,
            &minerals,
            now,
            rng,
        ) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("simulation aborted a session: {err}");
                break;
            }
        };

        stats.ops += 1;
        if result.failure == Some(FailureReason::InsufficientStamina) {
            // A shift's rest; time passes, nothing else changes.
            player.restore_stamina(player.max_stamina);
            now += 8 * 3_600;
            continue;
        }

        if result.success {
            stats.successes += 1;
            if let Some(rarity) = result.rarity {
                *stats.rarity_counts.entry(rarity).or_insert(0) += 1;
            }
            if result.bonus_discovery.is_some() {
                stats.bonus_discoveries += 1;
            }
        }

        let progression = apply_progression(&mut player, result.experience, &locations);

        // The host-side notification fan-out after an operation.
        let mut completions =
            notify(&mut player, &GameEvent::MineCompleted { success: result.success });
        if let Some(mineral_id) = &result.mineral_id {
            completions.extend(notify(
                &mut player,
                &GameEvent::MineralCollected {
                    mineral_id: mineral_id.clone(),
                },
            ));
        }
        if progression.new_rank.is_some() {
            completions.extend(notify(&mut player, &GameEvent::RankChanged));
        }
        for unlocked in &progression.unlocked_locations {
            completions.extend(notify(&mut player, &GameEvent::LocationUnlocked));
            // Always chase the deepest newly opened dig.
            let _ = player.travel_to(unlocked);
        }
        stats.achievements += completions.len() as u64;

        if config.sell_every_ops > 0 && (op + 1) % config.sell_every_ops == 0 {
            sell_everything(&mut player, &market, &minerals, now);
        }
    }

    sell_everything(&mut player, &market, &minerals, now);

    stats.final_level = player.level;
    stats.final_rank = player.rank;
    stats.money = player.money;
    stats.lifetime_earnings = player.lifetime_earnings;
    stats.best_single = player.best_single_mine;
    stats.best_streak = player.best_streak;
    stats
}

fn sell_everything(
    player: &mut Player,
    market: &MarketEngine,
    minerals: &MineralCatalog,
    now: i64,
) {
    let held: Vec<(String, u64)> = player
        .minerals()
        .iter()
        .map(|(id, count)| (id.clone(), *count))
        .collect();
    for (mineral_id, count) in held {
        if market.sell(player, minerals, &mineral_id, count, now).is_ok() {
            notify(player, &GameEvent::MoneyEarned);
        }
    }
}
