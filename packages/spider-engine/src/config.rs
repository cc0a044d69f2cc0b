//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the standard game: four suits, 500 starting points, a 50-entry
//! undo log and a one-second clock.
//!
//! # Example JSON Config
//!
//! ```json
//! {
//!   "seed": 12345,
//!   "difficulty": "two-suit",
//!   "scoring": { "foundation_move": 150 }
//! }
//! ```

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::history::MAX_HISTORY;
use crate::domain::state::INITIAL_SCORE;
use crate::domain::Difficulty;
use crate::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub initial: i32,
    /// Awarded for each tableau-to-tableau move.
    pub tableau_move: i32,
    /// Awarded for each run sent to a foundation.
    pub foundation_move: i32,
    /// Taken back on undo; the score never drops below zero this way.
    pub undo_penalty: i32,
    /// Clock seconds between decay steps.
    pub decay_interval_secs: u32,
    pub decay_points: i32,
    /// Win bonus is `(win_par_secs - time_elapsed) * win_multiplier`.
    pub win_par_secs: i64,
    pub win_multiplier: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            initial: INITIAL_SCORE,
            tableau_move: 5,
            foundation_move: 100,
            undo_penalty: 5,
            decay_interval_secs: 10,
            decay_points: 1,
            win_par_secs: 500,
            win_multiplier: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed for reproducible deals. `None` draws a fresh seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
    pub max_history: usize,
    /// Delay between cards during an animated deal.
    pub deal_stagger_ms: u64,
    /// Wall-clock length of one game-clock second.
    pub tick_ms: u64,
    pub scoring: ScoringConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            difficulty: Difficulty::default(),
            max_history: MAX_HISTORY,
            deal_stagger_ms: 50,
            tick_ms: 1000,
            scoring: ScoringConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Build a config from an optional JSON value. Missing fields take
    /// their defaults; unknown fields are ignored.
    pub fn from_json(config: Option<&JsonValue>) -> Result<Self, ConfigError> {
        let cfg = match config {
            Some(json) => serde_json::from_value(json.clone())?,
            None => Self::default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults overridden by `SPIDER_SEED`, `SPIDER_DIFFICULTY` and
    /// `SPIDER_MAX_HISTORY` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(raw) = optional_var("SPIDER_SEED") {
            let seed = raw
                .parse::<u64>()
                .map_err(|_| ConfigError::invalid(format!("SPIDER_SEED is not a u64: '{raw}'")))?;
            cfg.seed = Some(seed);
        }
        if let Some(raw) = optional_var("SPIDER_DIFFICULTY") {
            cfg.difficulty = Difficulty::parse(&raw).ok_or_else(|| {
                ConfigError::invalid(format!(
                    "SPIDER_DIFFICULTY must be one-suit, two-suit or four-suit, got '{raw}'"
                ))
            })?;
        }
        if let Some(raw) = optional_var("SPIDER_MAX_HISTORY") {
            cfg.max_history = raw.parse::<usize>().map_err(|_| {
                ConfigError::invalid(format!("SPIDER_MAX_HISTORY is not a number: '{raw}'"))
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history == 0 {
            return Err(ConfigError::invalid("max_history must be at least 1"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::invalid("tick_ms must be at least 1"));
        }
        if self.scoring.decay_interval_secs == 0 {
            return Err(ConfigError::invalid(
                "scoring.decay_interval_secs must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn deal_stagger(&self) -> Duration {
        Duration::from_millis(self.deal_stagger_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
