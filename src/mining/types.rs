//! Mining operation result types.

use crate::minerals::Rarity;
use serde::{Deserialize, Serialize};

/// Why an operation produced nothing. All of these are normal outcomes the
/// host is expected to show the player, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// The stamina check failed before any work happened; nothing was
    /// deducted or mutated.
    InsufficientStamina,
    /// The success roll missed.
    MissedStrike,
    /// The location's mineral pool (and the Common fallback) was empty.
    NoEligibleMineral,
}

/// Audit trail of how an operation's numbers were assembled. Every field is
/// populated on success and failure alike so tests and balance tooling can
/// reconstruct the roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AppliedModifiers {
    /// Flat base rate before any adjustment.
    pub base_success_rate: f64,
    /// The `(6 - danger) * step` term.
    pub danger_bonus: f64,
    /// Aggregated location/skill/equipment/weather delta.
    pub modifier_delta: f64,
    /// Clamped rate before the high-risk penalty.
    pub unscaled_success_rate: f64,
    /// The rate the roll was made against.
    pub success_rate: f64,
    pub risk_penalty_applied: bool,
    pub risk_multiplier: f64,
    /// Stamina multiplier actually charged.
    pub stamina_mult: f64,
    /// Market price multiplier for the selected mineral (1.0 on failure).
    pub market_multiplier: f64,
    /// Location's per-mineral bonus for the selected mineral.
    pub location_bonus: f64,
    /// Aggregated additive value bonus.
    pub value_bonus: f64,
}

/// Outcome of one mining operation. Ephemeral: consumed by the host and the
/// progression tracker, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineResult {
    pub success: bool,
    pub failure: Option<FailureReason>,
    /// Player-facing flavor line for the outcome.
    pub message: String,
    pub mineral_id: Option<String>,
    pub rarity: Option<Rarity>,
    /// Final credited value, after every multiplier.
    pub value: u64,
    /// Experience the host should feed to `apply_progression`.
    pub experience: u32,
    /// Set when the secondary discovery roll hit.
    pub bonus_discovery: Option<String>,
    pub stamina_spent: u32,
    pub modifiers: AppliedModifiers,
}

impl MineResult {
    /// A failure outcome carrying no haul.
    pub fn failed(
        reason: FailureReason,
        message: String,
        experience: u32,
        stamina_spent: u32,
        modifiers: AppliedModifiers,
    ) -> Self {
        Self {
            success: false,
            failure: Some(reason),
            message,
            mineral_id: None,
            rarity: None,
            value: 0,
            experience,
            bonus_discovery: None,
            stamina_spent,
            modifiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_shape() {
        let result = MineResult::failed(
            FailureReason::InsufficientStamina,
            "Too exhausted to run the drill.".to_string(),
            0,
            0,
            AppliedModifiers::default(),
        );
        assert!(!result.success);
        assert_eq!(result.failure, Some(FailureReason::InsufficientStamina));
        assert_eq!(result.value, 0);
        assert_eq!(result.mineral_id, None);
        assert_eq!(result.bonus_discovery, None);
    }
}
