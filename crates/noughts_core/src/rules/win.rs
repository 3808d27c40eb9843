//! Win detection logic for tic-tac-toe.
//!
//! Only lines through the last move can have been completed by it, so the
//! check looks at that move's row, its column and, for even indices, the
//! diagonals through it.

use super::Outcome;
use crate::board::Board;
use crate::position::Position;
use crate::types::{Cell, Sign};
use serde::Serialize;

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Line([Position; 3]);

impl Line {
    const fn from_indices(a: usize, b: usize, c: usize) -> Self {
        Line([Position::ALL[a], Position::ALL[b], Position::ALL[c]])
    }

    /// The three positions, in ascending index order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices, in ascending index order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The sign holding all three cells, if one does.
    pub fn owner(&self, board: &Board) -> Option<Sign> {
        let [a, b, c] = self.0.map(|pos| board.get(pos));
        match a {
            Cell::Marked(sign) if a == b && b == c => Some(sign),
            _ => None,
        }
    }
}

/// All eight winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    Line::from_indices(0, 1, 2),
    Line::from_indices(3, 4, 5),
    Line::from_indices(6, 7, 8),
    Line::from_indices(0, 3, 6),
    Line::from_indices(1, 4, 7),
    Line::from_indices(2, 5, 8),
    Line::from_indices(0, 4, 8),
    Line::from_indices(2, 4, 6),
];

/// Returns the line completed through `last`, checking its row, then its
/// column, then the diagonals it lies on.
pub fn winning_line(board: &Board, last: Position) -> Option<Line> {
    let index = last.to_index();

    let row = index - index % 3;
    let row = Line::from_indices(row, row + 1, row + 2);
    if row.owner(board).is_some() {
        return Some(row);
    }

    let col = index % 3;
    let col = Line::from_indices(col, col + 3, col + 6);
    if col.owner(board).is_some() {
        return Some(col);
    }

    if !last.on_diagonal() {
        return None;
    }

    // The center sits on both diagonals, every other even index on one.
    let checks = if last == Position::Center { 2 } else { 1 };
    let mut k = index % 4;
    for _ in 0..checks {
        let diagonal = Line::from_indices(k, 4, 8 - k);
        if diagonal.owner(board).is_some() {
            return Some(diagonal);
        }
        k += 2;
    }

    None
}

/// Classifies `board` after a mark was placed at `last`.
///
/// Never reports both a win and a draw: a completed line wins even when the
/// final mark fills the board.
pub fn classify(board: &Board, last: Position) -> Outcome {
    if let Some(line) = winning_line(board, last) {
        return Outcome::Win(line);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}
