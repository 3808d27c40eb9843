//! The 3x3 grid and its mutation/query primitives.

use super::position::Position;
use super::types::{Cell, Sign};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// A marked cell is never cleared except by [`Board::clear`]. The board is
/// `Copy`, so [`Board::snapshot`] hands out an independent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from a row-major picture such as `"XO.|.X.|..O"`.
    ///
    /// `X`/`x` is Cross, `O`/`o` is Nought, anything else is empty; `|` and
    /// whitespace are ignored. Returns `None` unless exactly nine cells are
    /// described.
    pub fn from_picture(picture: &str) -> Option<Self> {
        let cells: Vec<Cell> = picture
            .chars()
            .filter(|c| *c != '|' && !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Cell::Marked(Sign::Cross),
                'O' | 'o' => Cell::Marked(Sign::Nought),
                _ => Cell::Empty,
            })
            .collect();
        let cells: [Cell; 9] = cells.try_into().ok()?;
        Some(Self { cells })
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Marks `pos` with `sign` if it is empty; does nothing otherwise.
    ///
    /// Returns whether the mark was placed. Callers that care about
    /// legality check [`Board::is_vacant`] first.
    pub fn place(&mut self, pos: Position, sign: Sign) -> bool {
        let cell = &mut self.cells[pos.to_index()];
        if *cell != Cell::Empty {
            trace!(?pos, "Cell already occupied, ignoring");
            return false;
        }
        *cell = Cell::Marked(sign);
        true
    }

    /// Undoes a placement during search. Only the engine's private copies
    /// are ever retracted.
    pub(crate) fn retract(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Sets every cell back to empty.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// True iff every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::Empty)
    }

    /// True iff the cell at `pos` is empty.
    pub fn is_vacant(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns an independent copy of the board.
    pub fn snapshot(&self) -> Board {
        *self
    }

    /// Number of marked cells.
    pub fn ply(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Empty positions in index order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable grid, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Marked(sign) => sign.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_only_fills_empty_cells() {
        let mut board = Board::new();
        assert!(board.place(Position::Center, Sign::Cross));
        assert!(!board.place(Position::Center, Sign::Nought));
        assert_eq!(board.get(Position::Center), Cell::Marked(Sign::Cross));
    }

    #[test]
    fn test_empty_and_full() {
        let mut board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());

        board.place(Position::TopLeft, Sign::Cross);
        assert!(!board.is_empty());

        for pos in Position::ALL {
            board.place(pos, Sign::Nought);
        }
        assert!(board.is_full());
        assert_eq!(board.ply(), 9);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::from_picture("XOX|OXO|OXO").unwrap();
        board.clear();
        assert!(board.is_empty());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::new();
        let mut copy = board.snapshot();
        copy.place(Position::Center, Sign::Cross);
        assert!(board.is_vacant(Position::Center));
        board.place(Position::TopLeft, Sign::Nought);
        assert!(copy.is_vacant(Position::TopLeft));
    }

    #[test]
    fn test_from_picture() {
        let board = Board::from_picture("X.O|...|..X").unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Marked(Sign::Cross));
        assert_eq!(board.get(Position::TopRight), Cell::Marked(Sign::Nought));
        assert_eq!(board.get(Position::BottomRight), Cell::Marked(Sign::Cross));
        assert_eq!(board.ply(), 3);
        assert!(Board::from_picture("XO").is_none());
    }

    #[test]
    fn test_display() {
        let board = Board::from_picture("X..|.O.|...").unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
