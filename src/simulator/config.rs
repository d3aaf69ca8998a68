//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent sessions to simulate.
    pub num_sessions: u32,

    /// Mining operations attempted per session.
    pub ops_per_session: u32,

    /// Risk dial every operation is run at.
    pub risk: f64,

    /// Random seed for reproducibility (None = per-session entropy).
    pub seed: Option<u64>,

    /// Seconds of simulated time between operations.
    pub seconds_per_op: i64,

    /// Sell the whole inventory every N operations.
    pub sell_every_ops: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-session lines).
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_sessions: 200,
            ops_per_session: 1_000,
            risk: 1.0,
            seed: None,
            seconds_per_op: 60,
            sell_every_ops: 50,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for comparing risk dials.
    pub fn risk_profile(risk: f64) -> Self {
        Self {
            num_sessions: 100,
            ops_per_session: 500,
            risk,
            ..Default::default()
        }
    }
}
