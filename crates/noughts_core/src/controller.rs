//! Match controller: the state machine driving turns, rounds and scores.
//!
//! The controller exclusively owns the board and both players. Input
//! arrives as [`MatchController::cell_activated`] (humans) or through fired
//! [`ScheduledTask`]s (bot moves and round changes); output leaves as
//! [`MatchEvent`]s in an outbox the host drains.

use crate::ai::Engine;
use crate::board::Board;
use crate::config::MatchConfig;
use crate::events::{Highlight, MatchEvent, Verdict};
use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::schedule::{ScheduledTask, TaskKind, Ticket};
use crate::types::{Player, PlayerSpec, PlayerView, Sign};
use derive_getters::Getters;
use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Waiting for the side to move.
    AwaitingMove,
    /// A round just ended; the next one starts when its task fires.
    RoundResolving,
    /// Terminal until [`MatchController::play_again`].
    MatchOver,
}

/// Immutable snapshot of a match for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MatchView {
    /// Copy of the board.
    board: Board,
    /// Current round, starting at 1.
    round: u32,
    /// Round limit.
    max_rounds: u32,
    /// Score that ends the match.
    max_score: u32,
    /// Side to move.
    turn: Sign,
    /// Controller phase.
    phase: Phase,
    /// Whether human input is currently accepted.
    editable: bool,
    /// Cross player.
    cross: PlayerView,
    /// Nought player.
    nought: PlayerView,
    /// Result once the match is over.
    verdict: Option<Verdict>,
}

/// Drives a multi-round match between two configured players.
#[derive(Debug)]
pub struct MatchController<R = StdRng> {
    config: MatchConfig,
    players: [Player; 2],
    board: Board,
    round: u32,
    turn: Sign,
    phase: Phase,
    editable: bool,
    generation: u64,
    verdict: Option<Verdict>,
    engine: Engine<R>,
    events: Vec<MatchEvent>,
    scheduled: Vec<ScheduledTask>,
}

impl MatchController<StdRng> {
    /// Starts a match with an entropy-seeded engine.
    pub fn with_entropy(config: MatchConfig, cross: PlayerSpec, nought: PlayerSpec) -> Self {
        Self::start(config, cross, nought, Engine::from_entropy())
    }
}

impl<R: Rng> MatchController<R> {
    /// Starts a new match: round 1, empty board, zero scores, Cross to move.
    ///
    /// If Cross is a bot its first move is queued immediately.
    #[instrument(skip(engine))]
    pub fn start(
        config: MatchConfig,
        cross: PlayerSpec,
        nought: PlayerSpec,
        engine: Engine<R>,
    ) -> Self {
        info!("Starting match");
        let mut controller = Self {
            config,
            players: [
                Player::new(Sign::Cross, cross),
                Player::new(Sign::Nought, nought),
            ],
            board: Board::new(),
            round: 1,
            turn: Sign::Cross,
            phase: Phase::AwaitingMove,
            editable: false,
            generation: 0,
            verdict: None,
            engine,
            events: Vec::new(),
            scheduled: Vec::new(),
        };
        controller.reset();
        controller
    }

    /// Resets to round 1 with the same players, zeroing scores.
    ///
    /// Pending tasks from before the reset become stale. Paused sides stay
    /// paused.
    #[instrument(skip(self), fields(round = self.round, phase = ?self.phase))]
    pub fn play_again(&mut self) {
        info!("Playing again");
        self.reset();
    }

    /// Human intent to play at `index` (0-8).
    ///
    /// Ignored unless the match awaits a move, the side to move is human and
    /// the board is editable, and the cell exists and is empty. Returns
    /// whether the move was applied.
    #[instrument(skip(self), fields(turn = %self.turn, phase = ?self.phase))]
    pub fn cell_activated(&mut self, index: usize) -> bool {
        let Some(pos) = Position::from_index(index) else {
            debug!("No such cell, ignoring");
            return false;
        };
        if self.phase != Phase::AwaitingMove {
            debug!("Not awaiting a move, ignoring");
            return false;
        }
        if self.current_player().spec().is_bot() {
            debug!("Bot to move, ignoring human input");
            return false;
        }
        if !self.editable {
            debug!("Board locked, ignoring");
            return false;
        }
        if !self.board.is_vacant(pos) {
            debug!(?pos, "Cell occupied, ignoring");
            return false;
        }
        self.apply_move(pos);
        true
    }

    /// Runs a scheduled task whose delay has elapsed.
    ///
    /// Tasks scheduled under a different state (another match generation,
    /// round, ply, turn or phase) are dropped. Returns whether the task had
    /// an effect.
    #[instrument(skip(self), fields(kind = ?task.kind()))]
    pub fn fire(&mut self, task: ScheduledTask) -> bool {
        if *task.ticket() != self.ticket() {
            debug!(expected = ?task.ticket(), current = ?self.ticket(), "Stale task dropped");
            return false;
        }

        match task.kind() {
            TaskKind::BotMove => {
                let player = self.current_player();
                if player.is_paused() {
                    debug!("Side paused, bot move dropped");
                    return false;
                }
                let Some(difficulty) = player.spec().difficulty() else {
                    return false;
                };
                match self.engine.choose_move(&self.board, self.turn, difficulty) {
                    Ok(pos) => {
                        self.apply_move(pos);
                        true
                    }
                    Err(e) => {
                        warn!(error = %e, "Engine could not move");
                        false
                    }
                }
            }
            TaskKind::NextRound => {
                self.start_next_round();
                true
            }
        }
    }

    /// Fires queued tasks immediately until none remain, ignoring delays.
    ///
    /// Returns how many tasks had an effect. A bot-vs-bot match runs to its
    /// end in a single call.
    #[instrument(skip(self))]
    pub fn settle(&mut self) -> usize {
        let mut fired = 0;
        while !self.scheduled.is_empty() {
            for task in std::mem::take(&mut self.scheduled) {
                if self.fire(task) {
                    fired += 1;
                }
            }
        }
        debug!(fired, "Settled");
        fired
    }

    /// Marks a side as paused; a paused bot never auto-moves.
    #[instrument(skip(self))]
    pub fn pause(&mut self, sign: Sign) {
        info!("Pausing side");
        self.players[sign.slot()].pause();
    }

    /// Pauses both sides, used when leaving a match mid-round.
    pub fn pause_bots(&mut self) {
        self.pause(Sign::Cross);
        self.pause(Sign::Nought);
    }

    /// Takes all events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Takes all tasks queued since the last call.
    pub fn take_scheduled(&mut self) -> Vec<ScheduledTask> {
        std::mem::take(&mut self.scheduled)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Side to move.
    pub fn turn(&self) -> Sign {
        self.turn
    }

    /// Whether human input is accepted right now.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Result of the match, once it is over.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Match configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Snapshot of one side.
    pub fn player(&self, sign: Sign) -> PlayerView {
        self.players[sign.slot()].view()
    }

    /// Snapshot of the whole match.
    pub fn view(&self) -> MatchView {
        MatchView {
            board: self.board.snapshot(),
            round: self.round,
            max_rounds: *self.config.max_rounds(),
            max_score: *self.config.max_score(),
            turn: self.turn,
            phase: self.phase,
            editable: self.editable,
            cross: self.player(Sign::Cross),
            nought: self.player(Sign::Nought),
            verdict: self.verdict,
        }
    }

    fn current_player(&self) -> &Player {
        &self.players[self.turn.slot()]
    }

    fn ticket(&self) -> Ticket {
        Ticket::new(
            self.generation,
            self.round,
            self.board.ply(),
            self.turn,
            self.phase,
        )
    }

    fn emit(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    fn schedule(&mut self, kind: TaskKind, delay: Duration) {
        let task = ScheduledTask::new(kind, delay, self.ticket());
        debug!(?kind, ?delay, "Scheduling task");
        self.scheduled.push(task);
    }

    fn set_editable(&mut self, editable: bool) {
        if self.editable != editable {
            self.editable = editable;
            self.emit(MatchEvent::BoardLocked(!editable));
        }
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.scheduled.clear();
        self.verdict = None;
        self.set_editable(false);

        for sign in [Sign::Cross, Sign::Nought] {
            self.players[sign.slot()].reset_score();
            self.emit(MatchEvent::ScoreChanged { sign, value: 0 });
        }

        self.round = 1;
        self.emit(MatchEvent::RoundChanged(1));

        self.board.clear();
        self.emit(MatchEvent::BoardCleared);

        self.phase = Phase::AwaitingMove;
        self.turn = Sign::Cross;
        self.emit(MatchEvent::TurnChanged(Sign::Cross));
        self.set_up_turn();
    }

    /// Unlocks the board for a human, or queues the bot's move.
    fn set_up_turn(&mut self) {
        let player = self.current_player();
        if player.is_paused() {
            debug!(turn = %self.turn, "Side paused, waiting");
            return;
        }
        if player.spec().is_bot() {
            self.set_editable(false);
            self.schedule(TaskKind::BotMove, self.config.bot_delay());
        } else {
            self.set_editable(true);
        }
    }

    fn apply_move(&mut self, pos: Position) {
        let sign = self.turn;
        if !self.board.place(pos, sign) {
            return;
        }
        debug!(?pos, %sign, round = self.round, "Mark placed");
        self.emit(MatchEvent::MarkPlaced {
            position: pos,
            sign,
        });

        match rules::classify(&self.board, pos) {
            Outcome::Win(line) => {
                info!(%sign, line = ?line.indices(), round = self.round, "Round won");
                self.emit(MatchEvent::CellsHighlighted {
                    cells: line.positions().to_vec(),
                    kind: Highlight::Win,
                });
                let value = self.players[sign.slot()].increase_score();
                self.emit(MatchEvent::ScoreChanged { sign, value });
                if value >= *self.config.max_score() {
                    self.conclude(Verdict::Winner(sign));
                } else {
                    self.finish_round();
                }
            }
            Outcome::Draw => {
                info!(round = self.round, "Round drawn");
                self.emit(MatchEvent::CellsHighlighted {
                    cells: Position::ALL.to_vec(),
                    kind: Highlight::Draw,
                });
                self.finish_round();
            }
            Outcome::Ongoing => {
                self.turn = sign.opponent();
                self.emit(MatchEvent::TurnChanged(self.turn));
                self.set_up_turn();
            }
        }
    }

    fn finish_round(&mut self) {
        if self.round >= *self.config.max_rounds() {
            let cross = self.players[Sign::Cross.slot()].score();
            let nought = self.players[Sign::Nought.slot()].score();
            let verdict = match cross.cmp(&nought) {
                std::cmp::Ordering::Greater => Verdict::Winner(Sign::Cross),
                std::cmp::Ordering::Less => Verdict::Winner(Sign::Nought),
                std::cmp::Ordering::Equal => Verdict::Tie,
            };
            self.conclude(verdict);
            return;
        }
        self.phase = Phase::RoundResolving;
        self.set_editable(false);
        self.schedule(TaskKind::NextRound, self.config.round_delay());
    }

    fn conclude(&mut self, verdict: Verdict) {
        info!(%verdict, round = self.round, "Match concluded");
        self.phase = Phase::MatchOver;
        self.set_editable(false);
        self.verdict = Some(verdict);
        self.emit(MatchEvent::MatchConcluded(verdict));
    }

    fn start_next_round(&mut self) {
        let last_mover = self.turn;
        self.board.clear();
        self.emit(MatchEvent::BoardCleared);

        self.round += 1;
        info!(round = self.round, "Next round");
        self.emit(MatchEvent::RoundChanged(self.round));

        self.turn = self.config.round_opener().next(last_mover);
        self.emit(MatchEvent::TurnChanged(self.turn));

        self.phase = Phase::AwaitingMove;
        self.set_up_turn();
    }
}
