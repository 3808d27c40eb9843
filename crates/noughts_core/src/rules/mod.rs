//! Game rules for tic-tac-toe.
//!
//! Pure functions classifying a position after a move. Rules never mutate
//! the board and never notify anyone; the match controller inspects the
//! returned [`Outcome`] and drives its own transitions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, LINES, classify, winning_line};

/// Classification of a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Play continues.
    Ongoing,
    /// The last move completed the given line.
    Win(Line),
    /// The board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Whether the round is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}
