//! Core domain types: signs, cells, difficulty tiers and players.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};
use tracing::instrument;

/// The mark a player draws on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Sign {
    /// Cross, always the opening side of a match.
    #[display("X")]
    Cross,
    /// Nought.
    #[display("O")]
    Nought,
}

impl Sign {
    /// Returns the opposing sign.
    pub fn opponent(self) -> Self {
        match self {
            Sign::Cross => Sign::Nought,
            Sign::Nought => Sign::Cross,
        }
    }

    /// Slot of this sign in two-element per-player arrays.
    pub(crate) fn slot(self) -> usize {
        match self {
            Sign::Cross => 0,
            Sign::Nought => 1,
        }
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by the given sign.
    Marked(Sign),
}

impl Cell {
    /// Returns the sign occupying this cell, if any.
    pub fn sign(self) -> Option<Sign> {
        match self {
            Cell::Empty => None,
            Cell::Marked(sign) => Some(sign),
        }
    }
}

/// Bot difficulty tier.
///
/// Higher tiers bypass the exhaustive search less often; `Impossible`
/// never bypasses it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Always plays a random legal cell.
    Easy,
    /// Searches half of the time.
    Normal,
    /// Searches most of the time.
    Hard,
    /// Always searches.
    Impossible,
}

/// Configuration for one side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSpec {
    /// Moves arrive through cell activation.
    Human,
    /// Moves are chosen by the engine at the given tier.
    Bot(Difficulty),
}

impl PlayerSpec {
    /// Returns true for bot-controlled sides.
    pub fn is_bot(self) -> bool {
        matches!(self, PlayerSpec::Bot(_))
    }

    /// Returns the difficulty of a bot side, `None` for humans.
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            PlayerSpec::Human => None,
            PlayerSpec::Bot(difficulty) => Some(difficulty),
        }
    }
}

impl std::fmt::Display for PlayerSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSpec::Human => write!(f, "human"),
            PlayerSpec::Bot(difficulty) => write!(f, "{}", difficulty),
        }
    }
}

/// Player spec string that is neither `human` nor a difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown player spec '{}' (expected human, easy, normal, hard or impossible)", input)]
pub struct SpecError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for PlayerSpec {
    type Err = SpecError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("human") {
            return Ok(PlayerSpec::Human);
        }
        Difficulty::from_str(trimmed)
            .map(PlayerSpec::Bot)
            .map_err(|_| SpecError {
                input: s.to_string(),
            })
    }
}

/// Mutable per-match player record, owned by the match controller.
#[derive(Debug, Clone)]
pub(crate) struct Player {
    sign: Sign,
    spec: PlayerSpec,
    score: u32,
    paused: bool,
}

impl Player {
    pub(crate) fn new(sign: Sign, spec: PlayerSpec) -> Self {
        Self {
            sign,
            spec,
            score: 0,
            paused: false,
        }
    }

    pub(crate) fn spec(&self) -> PlayerSpec {
        self.spec
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn is_paused(&self) -> bool {
        self.paused
    }

    /// Increments the score and returns the new value.
    pub(crate) fn increase_score(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }

    pub(crate) fn pause(&mut self) {
        self.paused = true;
    }

    pub(crate) fn view(&self) -> PlayerView {
        PlayerView {
            sign: self.sign,
            is_bot: self.spec.is_bot(),
            difficulty: self.spec.difficulty(),
            score: self.score,
            paused: self.paused,
        }
    }
}

/// Read-only snapshot of a player, handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct PlayerView {
    /// Assigned sign.
    sign: Sign,
    /// Whether the engine drives this side.
    is_bot: bool,
    /// Bot tier, `None` for humans.
    difficulty: Option<Difficulty>,
    /// Rounds won so far.
    score: u32,
    /// Paused sides never auto-move.
    paused: bool,
}
