//! Presentation state, rebuilt purely from match events.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use noughts_core::{Highlight, MatchEvent, PlayerSpec, Position, Sign, Verdict};
use tracing::debug;

use super::input::move_cursor;

/// Scoreboard names: "Player" or "Bot", numbered when both sides are alike.
pub fn scoreboard_names(cross: PlayerSpec, nought: PlayerSpec) -> [String; 2] {
    let name = |spec: PlayerSpec| if spec.is_bot() { "Bot" } else { "Player" };
    let mut names = [name(cross).to_string(), name(nought).to_string()];
    if cross.is_bot() == nought.is_bot() {
        names[0].push_str(" One");
        names[1].push_str(" Two");
    }
    names
}

/// Main application state.
#[derive(Debug, Clone, Getters)]
pub struct App {
    /// Marks as the presentation layer has seen them.
    cells: [Option<Sign>; 9],
    /// Highlighted cells and why.
    highlight: Option<(Vec<Position>, Highlight)>,
    /// Side to move.
    turn: Sign,
    /// Round shown on the scoreboard.
    round: u32,
    /// Scores indexed Cross, Nought.
    scores: [u32; 2],
    /// Scoreboard names indexed Cross, Nought.
    names: [String; 2],
    /// Whether input is currently refused.
    locked: bool,
    /// Match result once concluded.
    verdict: Option<Verdict>,
    /// Keyboard cursor.
    cursor: Position,
}

impl App {
    /// Creates the presentation state for a new match.
    pub fn new(cross: PlayerSpec, nought: PlayerSpec) -> Self {
        Self {
            cells: [None; 9],
            highlight: None,
            turn: Sign::Cross,
            round: 1,
            scores: [0, 0],
            names: scoreboard_names(cross, nought),
            locked: true,
            verdict: None,
            cursor: Position::Center,
        }
    }

    /// Applies one event from the match controller.
    pub fn handle_event(&mut self, event: MatchEvent) {
        debug!(?event, "Handling match event");

        match event {
            MatchEvent::MarkPlaced { position, sign } => {
                self.cells[position.to_index()] = Some(sign);
            }
            MatchEvent::CellsHighlighted { cells, kind } => {
                self.highlight = Some((cells, kind));
            }
            MatchEvent::BoardCleared => {
                self.cells = [None; 9];
                self.highlight = None;
                self.verdict = None;
            }
            MatchEvent::TurnChanged(sign) => self.turn = sign,
            MatchEvent::RoundChanged(round) => self.round = round,
            MatchEvent::ScoreChanged { sign, value } => {
                self.scores[Self::slot(sign)] = value;
            }
            MatchEvent::BoardLocked(locked) => self.locked = locked,
            MatchEvent::MatchConcluded(verdict) => self.verdict = Some(verdict),
        }
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = move_cursor(self.cursor, key);
    }

    /// Places the cursor on `pos`.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = pos;
    }

    /// Name shown for `sign`.
    pub fn name(&self, sign: Sign) -> &str {
        &self.names[Self::slot(sign)]
    }

    /// Score shown for `sign`.
    pub fn score(&self, sign: Sign) -> u32 {
        self.scores[Self::slot(sign)]
    }

    /// Whether `pos` is part of the current highlight.
    pub fn is_highlighted(&self, pos: Position) -> Option<Highlight> {
        self.highlight
            .as_ref()
            .filter(|(cells, _)| cells.contains(&pos))
            .map(|(_, kind)| *kind)
    }

    /// Round counter text, replaced by the verdict once the match is over.
    pub fn headline(&self) -> String {
        match self.verdict {
            None => format!("Round {}", self.round),
            Some(Verdict::Winner(sign)) => format!("{} wins!", self.name(sign)),
            Some(Verdict::Tie) => "It's a tie...".to_string(),
        }
    }

    /// Status line below the board.
    pub fn status(&self) -> String {
        if self.verdict.is_some() {
            return "Press 'r' to play again or 'q' to quit.".to_string();
        }
        if self.locked {
            format!("{} ({}) is thinking...", self.name(self.turn), self.turn)
        } else {
            format!("{} ({}) to move", self.name(self.turn), self.turn)
        }
    }

    fn slot(sign: Sign) -> usize {
        match sign {
            Sign::Cross => 0,
            Sign::Nought => 1,
        }
    }
}
