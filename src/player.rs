//! The player aggregate.
//!
//! Single-owner per session: one mining operation reads and writes it to
//! completion before the next is accepted. All collection mutation goes
//! through accessor methods that keep the invariants (no negative counts,
//! stamina within [0, max], current location always unlocked).

use crate::achievements::AchievementId;
use crate::core::constants::{BASE_MAX_STAMINA, STARTING_LOCATION, STARTING_MONEY};
use crate::errors::EngineError;
use crate::locations::LocationCatalog;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full player state. Persisted externally by the host; the engine mutates
/// it in place and never destroys it during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,

    // Progression
    pub level: u32,
    pub experience: u64,
    /// Rank index into `core::balance::RANKS`.
    pub rank: usize,
    pub skill_points: u32,
    /// Skill points ever granted (levels + achievement rewards).
    #[serde(default)]
    pub lifetime_skill_points: u32,

    // Economy
    pub money: u64,
    pub lifetime_earnings: u64,
    #[serde(default)]
    pub debt: u64,

    // Vitality
    pub stamina: u32,
    pub max_stamina: u32,

    // Location state
    pub current_location: String,
    pub unlocked_locations: Vec<String>,

    // Collections
    minerals: HashMap<String, u64>,
    #[serde(default)]
    pub unlocked_skills: Vec<String>,
    #[serde(default)]
    pub equipped_items: Vec<String>,
    #[serde(default)]
    pub completed_achievements: Vec<AchievementId>,
    #[serde(default)]
    pub achievement_progress: HashMap<AchievementId, u64>,

    // Streaks and statistics
    pub consecutive_successes: u32,
    pub best_streak: u32,
    pub best_single_mine: u64,
    pub total_mines: u64,
    #[serde(default)]
    pub total_successful_mines: u64,

    pub created_at: i64,
}

impl Player {
    /// Creates a fresh player at the starting location.
    pub fn new(name: String, current_time: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            level: 1,
            experience: 0,
            rank: 0,
            skill_points: 0,
            lifetime_skill_points: 0,
            money: STARTING_MONEY,
            lifetime_earnings: 0,
            debt: 0,
            stamina: BASE_MAX_STAMINA,
            max_stamina: BASE_MAX_STAMINA,
            current_location: STARTING_LOCATION.to_string(),
            unlocked_locations: vec![STARTING_LOCATION.to_string()],
            minerals: HashMap::new(),
            unlocked_skills: Vec::new(),
            equipped_items: Vec::new(),
            completed_achievements: Vec::new(),
            achievement_progress: HashMap::new(),
            consecutive_successes: 0,
            best_streak: 0,
            best_single_mine: 0,
            total_mines: 0,
            total_successful_mines: 0,
            created_at: current_time,
        }
    }

    /// Re-establishes invariants after a load (and before any mutation the
    /// host is unsure about). This is the one place defaults are repaired;
    /// call sites do not null-check individually.
    pub fn normalize(&mut self, locations: &LocationCatalog) {
        if self.max_stamina == 0 {
            self.max_stamina = BASE_MAX_STAMINA;
        }
        self.stamina = self.stamina.min(self.max_stamina);

        self.unlocked_locations
            .retain(|id| locations.contains(id));
        if self.unlocked_locations.is_empty() {
            self.unlocked_locations.push(STARTING_LOCATION.to_string());
        }
        if !self.unlocked_locations.contains(&self.current_location) {
            self.current_location = self.unlocked_locations[0].clone();
        }

        // Dangling counts from a hand-edited or truncated snapshot.
        self.minerals.retain(|_, count| *count > 0);
    }

    // ── Minerals ────────────────────────────────────────────────────

    pub fn mineral_count(&self, mineral_id: &str) -> u64 {
        self.minerals.get(mineral_id).copied().unwrap_or(0)
    }

    pub fn total_minerals(&self) -> u64 {
        self.minerals.values().sum()
    }

    pub fn minerals(&self) -> &HashMap<String, u64> {
        &self.minerals
    }

    pub fn add_minerals(&mut self, mineral_id: &str, quantity: u64) {
        if quantity == 0 {
            return;
        }
        *self.minerals.entry(mineral_id.to_string()).or_insert(0) += quantity;
    }

    /// Removes minerals from the inventory; never leaves a negative count.
    pub fn remove_minerals(&mut self, mineral_id: &str, quantity: u64) -> Result<(), EngineError> {
        let available = self.mineral_count(mineral_id);
        if available < quantity {
            return Err(EngineError::InsufficientMinerals {
                mineral_id: mineral_id.to_string(),
                needed: quantity,
                available,
            });
        }
        let remaining = available - quantity;
        if remaining == 0 {
            self.minerals.remove(mineral_id);
        } else {
            self.minerals.insert(mineral_id.to_string(), remaining);
        }
        Ok(())
    }

    // ── Economy ─────────────────────────────────────────────────────

    /// Credits money and counts it toward lifetime earnings.
    pub fn add_earnings(&mut self, amount: u64) {
        self.money += amount;
        self.lifetime_earnings += amount;
    }

    pub fn spend_money(&mut self, amount: u64) -> Result<(), EngineError> {
        if self.money < amount {
            return Err(EngineError::InsufficientFunds {
                needed: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        Ok(())
    }

    /// Grants skill points and tracks the lifetime total.
    pub fn grant_skill_points(&mut self, points: u32) {
        self.skill_points += points;
        self.lifetime_skill_points += points;
    }

    // ── Vitality ────────────────────────────────────────────────────

    pub fn spend_stamina(&mut self, cost: u32) {
        self.stamina = self.stamina.saturating_sub(cost);
    }

    pub fn restore_stamina(&mut self, amount: u32) {
        self.stamina = (self.stamina + amount).min(self.max_stamina);
    }

    // ── Locations ───────────────────────────────────────────────────

    pub fn is_location_unlocked(&self, location_id: &str) -> bool {
        self.unlocked_locations.iter().any(|id| id == location_id)
    }

    /// Unlocks a location. Returns true if newly unlocked.
    pub fn unlock_location(&mut self, location_id: &str) -> bool {
        if self.is_location_unlocked(location_id) {
            return false;
        }
        self.unlocked_locations.push(location_id.to_string());
        true
    }

    /// Moves the player. The destination must already be unlocked.
    pub fn travel_to(&mut self, location_id: &str) -> Result<(), EngineError> {
        if !self.is_location_unlocked(location_id) {
            return Err(EngineError::LocationLocked(location_id.to_string()));
        }
        self.current_location = location_id.to_string();
        Ok(())
    }

    // ── Skills ──────────────────────────────────────────────────────

    pub fn has_skill(&self, skill_id: &str) -> bool {
        self.unlocked_skills.iter().any(|id| id == skill_id)
    }

    // ── Mining statistics ───────────────────────────────────────────

    /// Records a successful mine: streak, best-streak, best single value.
    pub fn record_mine_success(&mut self, value: u64) {
        self.total_mines += 1;
        self.total_successful_mines += 1;
        self.consecutive_successes += 1;
        self.best_streak = self.best_streak.max(self.consecutive_successes);
        self.best_single_mine = self.best_single_mine.max(value);
    }

    /// Records a failed mine: the streak resets, bests stay.
    pub fn record_mine_failure(&mut self) {
        self.total_mines += 1;
        self.consecutive_successes = 0;
    }
}
