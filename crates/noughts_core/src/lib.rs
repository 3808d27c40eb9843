//! Noughts core - tic-tac-toe match logic.
//!
//! This crate holds everything with algorithmic content and nothing that
//! renders, sleeps or reads input.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and its primitives
//! - **Rules**: pure win/draw classification of a position after a move
//! - **Engine**: minimax move selection with tiered difficulty
//! - **Controller**: the match state machine; owns the board and players,
//!   emits [`MatchEvent`]s and requests delays as [`ScheduledTask`]s
//!
//! # Example
//!
//! ```
//! use noughts_core::{Engine, MatchConfig, MatchController, MatchEvent, PlayerSpec, Sign, Verdict};
//!
//! let mut game = MatchController::start(
//!     MatchConfig::new(1, 10),
//!     PlayerSpec::Human,
//!     PlayerSpec::Human,
//!     Engine::seeded(7),
//! );
//! for cell in [0, 3, 1, 4, 2] {
//!     game.cell_activated(cell);
//! }
//! assert_eq!(game.verdict(), Some(Verdict::Winner(Sign::Cross)));
//! assert!(game
//!     .drain_events()
//!     .contains(&MatchEvent::MatchConcluded(Verdict::Winner(Sign::Cross))));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod config;
mod controller;
mod error;
mod events;
mod position;
pub mod rules;
mod schedule;
mod types;

pub use ai::{Engine, best_moves, evaluate};
pub use board::Board;
pub use config::{EngineTuning, MatchConfig, RoundOpener};
pub use controller::{MatchController, MatchView, Phase};
pub use error::{ConfigError, EngineError};
pub use events::{Highlight, MatchEvent, Verdict};
pub use position::Position;
pub use rules::{Line, Outcome, classify};
pub use schedule::{ScheduledTask, TaskKind, Ticket};
pub use types::{Cell, Difficulty, PlayerSpec, PlayerView, Sign, SpecError};
