//! Mining resolution: the probabilistic core of the engine.

pub mod resolver;
pub mod types;

pub use resolver::{
    perform_operation, resolve_success_rate, sampling_weight, select_mineral, SuccessRate,
};
pub use types::{AppliedModifiers, FailureReason, MineResult};
