//! Simulation report aggregation and formatting.

use super::config::SimConfig;
use crate::minerals::Rarity;
use std::collections::HashMap;
use std::fmt::Write;

/// Raw stats collected from one simulated session.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    pub ops: u64,
    pub successes: u64,
    pub bonus_discoveries: u64,
    pub achievements: u64,
    pub final_level: u32,
    pub final_rank: usize,
    pub money: u64,
    pub lifetime_earnings: u64,
    pub best_single: u64,
    pub best_streak: u32,
    pub rarity_counts: HashMap<Rarity, u64>,
}

/// Aggregated results across every session.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub sessions: u32,
    pub risk: f64,
    pub total_ops: u64,
    pub total_successes: u64,
    pub total_bonus_discoveries: u64,
    pub total_achievements: u64,
    pub avg_final_level: f64,
    pub avg_lifetime_earnings: f64,
    pub avg_best_streak: f64,
    pub max_single_mine: u64,
    pub rarity_counts: HashMap<Rarity, u64>,
}

impl SimReport {
    pub fn from_sessions(config: &SimConfig, sessions: Vec<SessionStats>) -> Self {
        let count = sessions.len().max(1) as f64;
        let mut rarity_counts: HashMap<Rarity, u64> = HashMap::new();
        for session in &sessions {
            for (rarity, n) in &session.rarity_counts {
                *rarity_counts.entry(*rarity).or_insert(0) += n;
            }
        }

        Self {
            sessions: sessions.len() as u32,
            risk: config.risk,
            total_ops: sessions.iter().map(|s| s.ops).sum(),
            total_successes: sessions.iter().map(|s| s.successes).sum(),
            total_bonus_discoveries: sessions.iter().map(|s| s.bonus_discoveries).sum(),
            total_achievements: sessions.iter().map(|s| s.achievements).sum(),
            avg_final_level: sessions.iter().map(|s| f64::from(s.final_level)).sum::<f64>()
                / count,
            avg_lifetime_earnings: sessions
                .iter()
                .map(|s| s.lifetime_earnings as f64)
                .sum::<f64>()
                / count,
            avg_best_streak: sessions.iter().map(|s| f64::from(s.best_streak)).sum::<f64>()
                / count,
            max_single_mine: sessions.iter().map(|s| s.best_single).max().unwrap_or(0),
            rarity_counts,
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.total_ops == 0 {
            return 0.0;
        }
        self.total_successes as f64 / self.total_ops as f64
    }

    /// Human-readable summary table.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Simulation Report ===");
        let _ = writeln!(out, "Sessions:            {}", self.sessions);
        let _ = writeln!(out, "Risk dial:           {:.2}", self.risk);
        let _ = writeln!(out, "Operations:          {}", self.total_ops);
        let _ = writeln!(
            out,
            "Success rate:        {:.1}%",
            self.success_rate() * 100.0
        );
        let _ = writeln!(out, "Bonus discoveries:   {}", self.total_bonus_discoveries);
        let _ = writeln!(out, "Achievements:        {}", self.total_achievements);
        let _ = writeln!(out, "Avg final level:     {:.1}", self.avg_final_level);
        let _ = writeln!(
            out,
            "Avg lifetime earned: {:.0}",
            self.avg_lifetime_earnings
        );
        let _ = writeln!(out, "Avg best streak:     {:.1}", self.avg_best_streak);
        let _ = writeln!(out, "Best single mine:    {}", self.max_single_mine);
        let _ = writeln!(out, "--- extraction by rarity ---");
        for rarity in Rarity::ALL {
            let count = self.rarity_counts.get(&rarity).copied().unwrap_or(0);
            let _ = writeln!(out, "{:<12} {}", rarity.name(), count);
        }
        out
    }
}
