//! Draw detection logic for tic-tac-toe.

use crate::board::Board;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::classify;
    use super::super::Outcome;
    use super::*;
    use crate::{Position, Sign};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Sign::Cross);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_canonical_draw_grid() {
        let board = Board::from_picture("XOX|XOO|OXX").unwrap();
        assert!(is_full(&board));
        for last in Position::ALL {
            assert_eq!(classify(&board, last), Outcome::Draw);
        }
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        // X completes the top row with the final mark.
        let board = Board::from_picture("XXX|OOX|XOO").unwrap();
        assert!(is_full(&board));
        assert!(matches!(
            classify(&board, Position::TopCenter),
            Outcome::Win(_)
        ));
    }
}
