//! Game configuration loaded from environment variables.
//!
//! - `BLOCK_BLAST_SEED`: RNG seed (default: derived from the system clock)
//! - `BLOCK_BLAST_STUCK_POLICY`: `refill` (default) or `report`
//! - `BLOCK_BLAST_MAX_REFILLS`: bound on the refill loop; unset or `0` means unbounded
//!
//! Missing or unparsable values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

/// What to do when no tray piece fits anywhere after a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StuckPolicy {
    /// Discard and redraw the tray until something fits
    #[default]
    Refill,
    /// End the game and let the front end show it
    ReportStuck,
}

impl StuckPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "refill" => Some(StuckPolicy::Refill),
            "report" | "report_stuck" | "reportstuck" => Some(StuckPolicy::ReportStuck),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StuckPolicy::Refill => "refill",
            StuckPolicy::ReportStuck => "report",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub stuck_policy: StuckPolicy,
    /// Upper bound on consecutive tray refills; `None` retries forever
    pub max_refill_attempts: Option<u32>,
}

impl GameConfig {
    /// Deterministic configuration for a given seed
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            stuck_policy: StuckPolicy::Refill,
            max_refill_attempts: None,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCK_BLAST_SEED")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or_else(clock_seed);
        let stuck_policy = lookup("BLOCK_BLAST_STUCK_POLICY")
            .and_then(|v| StuckPolicy::from_str(&v))
            .unwrap_or_default();
        let max_refill_attempts = lookup("BLOCK_BLAST_MAX_REFILLS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&n| n > 0);

        Self {
            seed,
            stuck_policy,
            max_refill_attempts,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
