//! Notifications from the match controller to the presentation layer.

use crate::position::Position;
use crate::types::Sign;
use serde::Serialize;

/// Why cells are highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Highlight {
    /// The cells form the winning line.
    Win,
    /// The round was drawn; every cell is highlighted.
    Draw,
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Verdict {
    /// One side won the match.
    #[display("{} wins", _0)]
    Winner(Sign),
    /// Scores were level when the rounds ran out.
    #[display("Tie")]
    Tie,
}

impl Verdict {
    /// The winning sign, `None` for a tie.
    pub fn winner(self) -> Option<Sign> {
        match self {
            Verdict::Winner(sign) => Some(sign),
            Verdict::Tie => None,
        }
    }
}

/// Event emitted by the match controller, in the order things happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MatchEvent {
    /// A mark was drawn.
    MarkPlaced {
        /// Where the mark went.
        position: Position,
        /// Who played it.
        sign: Sign,
    },
    /// Cells should be highlighted.
    CellsHighlighted {
        /// Highlighted cells in index order.
        cells: Vec<Position>,
        /// Reason for the highlight.
        kind: Highlight,
    },
    /// The board was wiped for a new round or a new match; highlights go too.
    BoardCleared,
    /// The side to move changed.
    TurnChanged(Sign),
    /// A new round started.
    RoundChanged(u32),
    /// A side's score changed.
    ScoreChanged {
        /// Whose score.
        sign: Sign,
        /// New value.
        value: u32,
    },
    /// Human input was disabled (`true`) or enabled (`false`).
    BoardLocked(bool),
    /// The match is over.
    MatchConcluded(Verdict),
}
