//! Deepcore - Headless Resource-Extraction Simulation Engine
//!
//! A pure state-machine library: the host (UI, CLI, server) drives the
//! operations below and persists the returned state. Nothing here renders,
//! touches files, or reads the wall clock; timestamps come in as unix
//! seconds and randomness through an injected `rand::Rng`.
//!
//! The per-turn control flow a host is expected to run:
//! 1. `mining::perform_operation(player, location, risk, market, ...)`
//! 2. `progression::apply_progression(player, result.experience, locations)`
//! 3. `achievements::notify(player, event)` for each relevant event
//! 4. persist the player (and optionally a `MarketEngine` snapshot)
//!
//! `MarketEngine::tick` is driven independently on the host's schedule and
//! is safe to call from a separate scheduling thread.

pub mod achievements;
pub mod core;
pub mod equipment;
pub mod errors;
pub mod locations;
pub mod market;
pub mod minerals;
pub mod mining;
pub mod modifiers;
pub mod player;
pub mod progression;
pub mod simulator;
pub mod skills;
pub mod weather;

pub use achievements::{AchievementCompletion, AchievementId, GameEvent};
pub use errors::EngineError;
pub use locations::{LocationCatalog, MiningLocation};
pub use market::{MarketEngine, MarketSnapshot};
pub use minerals::{Mineral, MineralCatalog, Rarity};
pub use mining::{perform_operation, FailureReason, MineResult};
pub use player::Player;
pub use progression::{apply_progression, ProgressionReport};
