//! Match and engine tuning knobs.

use crate::error::ConfigError;
use crate::types::{Difficulty, Sign};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// Who opens rounds after the first. Every match opens with Cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOpener {
    /// Cross opens every round.
    #[default]
    Cross,
    /// Nought opens every round after the first.
    Nought,
    /// The side that did not place the round's final mark opens.
    Alternate,
}

impl RoundOpener {
    /// Opening side of the next round, given who placed the last mark.
    pub fn next(self, last_mover: Sign) -> Sign {
        match self {
            RoundOpener::Cross => Sign::Cross,
            RoundOpener::Nought => Sign::Nought,
            RoundOpener::Alternate => last_mover.opponent(),
        }
    }
}

/// Scoring thresholds and pacing for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Round wins that end the match immediately.
    max_score: u32,
    /// Rounds played before the match ends on points.
    max_rounds: u32,
    /// Pause before a bot's move is applied, in milliseconds.
    bot_delay_ms: u64,
    /// Pause between a round ending and the next one starting, in milliseconds.
    round_delay_ms: u64,
    /// Opening side of rounds after the first.
    round_opener: RoundOpener,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_score: 3,
            max_rounds: 10,
            bot_delay_ms: 500,
            round_delay_ms: 1500,
            round_opener: RoundOpener::default(),
        }
    }
}

impl MatchConfig {
    /// Creates a config with the given thresholds and default pacing.
    #[instrument]
    pub fn new(max_score: u32, max_rounds: u32) -> Self {
        Self {
            max_score,
            max_rounds,
            ..Self::default()
        }
    }

    /// Replaces both pacing delays.
    pub fn with_delays(mut self, bot_delay_ms: u64, round_delay_ms: u64) -> Self {
        self.bot_delay_ms = bot_delay_ms;
        self.round_delay_ms = round_delay_ms;
        self
    }

    /// Replaces the round opener policy.
    pub fn with_round_opener(mut self, round_opener: RoundOpener) -> Self {
        self.round_opener = round_opener;
        self
    }

    /// Bot thinking delay.
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }

    /// Delay before the next round starts.
    pub fn round_delay(&self) -> Duration {
        Duration::from_millis(self.round_delay_ms)
    }

    /// Rejects thresholds that would make a match unplayable.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_score == 0 {
            return Err(ConfigError::new("max_score must be at least 1"));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::new("max_rounds must be at least 1"));
        }
        Ok(())
    }
}

/// How often each bot tier skips the search and plays a random cell.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTuning {
    /// Bypass probability at `Normal`.
    normal_bypass: f64,
    /// Bypass probability at `Hard`.
    hard_bypass: f64,
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            normal_bypass: 0.5,
            hard_bypass: 0.2,
        }
    }
}

impl EngineTuning {
    /// Creates tuning with explicit bypass probabilities.
    #[instrument]
    pub fn new(normal_bypass: f64, hard_bypass: f64) -> Self {
        Self {
            normal_bypass,
            hard_bypass,
        }
    }

    /// Probability that `difficulty` plays a random cell instead of searching.
    pub fn bypass(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => 1.0,
            Difficulty::Normal => self.normal_bypass,
            Difficulty::Hard => self.hard_bypass,
            Difficulty::Impossible => 0.0,
        }
    }

    /// Rejects probabilities outside `0.0..=1.0`.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("normal_bypass", self.normal_bypass),
            ("hard_bypass", self.hard_bypass),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::new(format!(
                    "{} must be within 0.0..=1.0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
