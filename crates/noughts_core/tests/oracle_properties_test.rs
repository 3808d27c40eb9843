//! Exhaustive checks of the win/draw oracle over every reachable game.

use noughts_core::rules::LINES;
use noughts_core::{Board, Outcome, Position, Sign, classify};

/// Walks every legal game from `board`, checking each position after each
/// move. Returns the number of finished games below this node.
fn walk(board: &mut Board, to_move: Sign) -> usize {
    let mut games = 0;
    for pos in board.empty_cells() {
        let saved = *board;
        board.place(pos, to_move);

        let outcome = classify(board, pos);
        let completed: Vec<_> = LINES
            .iter()
            .filter(|line| line.contains(pos) && line.owner(board).is_some())
            .collect();

        match outcome {
            Outcome::Win(line) => {
                assert!(
                    completed.contains(&&line),
                    "reported line {:?} not complete through {pos}",
                    line.indices()
                );
                assert_eq!(line.owner(board), Some(to_move));
                games += 1;
            }
            Outcome::Draw => {
                assert!(completed.is_empty(), "draw reported with a completed line");
                assert!(board.is_full());
                games += 1;
            }
            Outcome::Ongoing => {
                assert!(completed.is_empty(), "missed a line through {pos}");
                assert!(!board.is_full());
                games += walk(board, to_move.opponent());
            }
        }

        *board = saved;
    }
    games
}

#[test]
fn test_classify_agrees_with_lines_in_every_game() {
    let mut board = Board::new();
    assert_eq!(walk(&mut board, Sign::Cross), 255_168);
}

#[test]
fn test_draw_requires_full_board() {
    let board = Board::from_picture("XOX|XOO|OX.").unwrap();
    assert_eq!(classify(&board, Position::BottomCenter), Outcome::Ongoing);
}

#[test]
fn test_only_lines_through_last_move_count() {
    // Cross completed the left column earlier; Nought's move elsewhere
    // does not re-report it.
    let board = Board::from_picture("XO.|XO.|X..").unwrap();
    assert_eq!(classify(&board, Position::TopCenter), Outcome::Ongoing);
    assert!(matches!(classify(&board, Position::TopLeft), Outcome::Win(_)));
}
