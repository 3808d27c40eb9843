//! Delayed work requested by the match controller.
//!
//! The controller never sleeps. It queues a [`ScheduledTask`] and the host
//! hands the task back through
//! [`MatchController::fire`](crate::MatchController::fire) once the delay
//! has elapsed. Each task carries a [`Ticket`] describing the state it was
//! scheduled in; a task whose ticket no longer matches is stale and has no
//! effect.

use crate::controller::Phase;
use crate::types::Sign;
use derive_getters::Getters;
use derive_new::new;
use std::time::Duration;

/// What a scheduled task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Ask the engine for the bot's move and apply it.
    BotMove,
    /// Clear the board and start the next round.
    NextRound,
}

/// Capture of the controller state a task was scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, new)]
pub struct Ticket {
    /// Bumped on every reset, so timers from an earlier match never match.
    generation: u64,
    /// Round number.
    round: u32,
    /// Marks on the board.
    ply: usize,
    /// Side to move.
    turn: Sign,
    /// Controller phase.
    phase: Phase,
}

/// Delayed work for the host to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct ScheduledTask {
    /// Effect to apply.
    kind: TaskKind,
    /// How long to wait before firing.
    delay: Duration,
    /// State the effect expects.
    ticket: Ticket,
}
