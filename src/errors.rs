//! Engine error types.
//!
//! These cover host/programmer mistakes and catalog inconsistencies only.
//! Expected game outcomes (a failed mining attempt, insufficient stamina,
//! an empty mineral pool) are normal result values, never errors.

use thiserror::Error;

/// Errors surfaced to the host. None of these are retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("unknown mineral id: {0}")]
    UnknownMineral(String),

    #[error("unknown location id: {0}")]
    UnknownLocation(String),

    #[error("unknown skill id: {0}")]
    UnknownSkill(String),

    #[error("unknown equipment id: {0}")]
    UnknownItem(String),

    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    #[error("risk multiplier {0} outside supported range")]
    InvalidRisk(f64),

    #[error("skill {0} is already unlocked")]
    SkillAlreadyOwned(String),

    #[error("not enough skill points: need {needed}, have {available}")]
    InsufficientSkillPoints { needed: u32, available: u32 },

    #[error("not enough {mineral_id} in inventory: need {needed}, have {available}")]
    InsufficientMinerals {
        mineral_id: String,
        needed: u64,
        available: u64,
    },

    #[error("not enough credits: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("location {0} is not unlocked")]
    LocationLocked(String),
}
