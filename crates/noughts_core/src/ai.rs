//! Move selection for bot-controlled sides.
//!
//! Search is plain exhaustive minimax with Cross maximizing and Nought
//! minimizing. Terminal positions score `±10` for the winner, shortened by
//! the depth at which the win happens, and `0` for a draw. Every candidate
//! is searched on a private copy of the board that is restored after each
//! branch.

use crate::board::Board;
use crate::config::EngineTuning;
use crate::error::EngineError;
use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::types::{Difficulty, Sign};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Raw score of a won position before the depth adjustment.
const WIN_SCORE: i32 = 10;

/// Decision engine for bot players.
///
/// The engine owns its random source so runs are reproducible under a
/// fixed seed.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    rng: R,
    tuning: EngineTuning,
}

impl Engine<StdRng> {
    /// Creates an engine seeded from system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates an engine with a deterministic seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an engine over the given random source with default tuning.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            tuning: EngineTuning::default(),
        }
    }

    /// Replaces the per-tier bypass probabilities.
    pub fn with_tuning(mut self, tuning: EngineTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Returns the active tuning.
    pub fn tuning(&self) -> &EngineTuning {
        &self.tuning
    }

    /// Picks a cell for `side` to play.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMoves`] when the board is full.
    #[instrument(skip(self, board), fields(ply = board.ply()))]
    pub fn choose_move(
        &mut self,
        board: &Board,
        side: Sign,
        difficulty: Difficulty,
    ) -> Result<Position, EngineError> {
        let legal = board.empty_cells();
        if legal.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        if difficulty == Difficulty::Easy {
            return self.pick(&legal);
        }

        if board.is_empty() {
            // Searching an empty board collapses onto one symmetric answer.
            let choice = if difficulty == Difficulty::Impossible {
                self.pick(&Position::CORNERS)?
            } else {
                self.pick(&legal)?
            };
            debug!(?choice, "Opening move");
            return Ok(choice);
        }

        let bypass = self.tuning.bypass(difficulty);
        if bypass > 0.0 && self.rng.gen_bool(bypass.min(1.0)) {
            debug!(%difficulty, "Skipping search, playing at random");
            return self.pick(&legal);
        }

        let best = best_moves(board, side)?;
        let choice = self.pick(&best)?;
        debug!(?choice, candidates = best.len(), "Search complete");
        Ok(choice)
    }

    /// Returns every optimal move for `side`, in index order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMoves`] when the board is full.
    pub fn best_moves(&self, board: &Board, side: Sign) -> Result<Vec<Position>, EngineError> {
        best_moves(board, side)
    }

    fn pick(&mut self, options: &[Position]) -> Result<Position, EngineError> {
        options
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoLegalMoves)
    }
}

/// Scores every legal move for `side` by exhaustive minimax.
///
/// Scores are from Cross's point of view regardless of `side`.
#[instrument(skip(board), fields(ply = board.ply()))]
pub fn evaluate(board: &Board, side: Sign) -> Vec<(Position, i32)> {
    let mut scratch = board.snapshot();
    let mut scores = Vec::new();
    for pos in board.empty_cells() {
        scratch.place(pos, side);
        let score = minimax(&mut scratch, side.opponent(), 0, pos);
        scratch.retract(pos);
        scores.push((pos, score));
    }
    scores
}

/// All moves attaining the best score for `side`: the maximum for Cross,
/// the minimum for Nought.
///
/// # Errors
///
/// Returns [`EngineError::NoLegalMoves`] when the board is full.
pub fn best_moves(board: &Board, side: Sign) -> Result<Vec<Position>, EngineError> {
    let scores = evaluate(board, side);
    let best = match side {
        Sign::Cross => scores.iter().map(|(_, s)| *s).max(),
        Sign::Nought => scores.iter().map(|(_, s)| *s).min(),
    }
    .ok_or(EngineError::NoLegalMoves)?;

    Ok(scores
        .into_iter()
        .filter(|(_, score)| *score == best)
        .map(|(pos, _)| pos)
        .collect())
}

/// Value of `board` after `last` was played, with `to_move` next.
fn minimax(board: &mut Board, to_move: Sign, depth: i32, last: Position) -> i32 {
    match rules::classify(board, last) {
        Outcome::Win(_) => {
            let score = match board.get(last).sign() {
                Some(Sign::Cross) => WIN_SCORE,
                _ => -WIN_SCORE,
            };
            score - score.signum() * depth
        }
        Outcome::Draw => 0,
        Outcome::Ongoing => {
            let maximizing = to_move == Sign::Cross;
            let mut best = if maximizing { i32::MIN } else { i32::MAX };
            for pos in Position::ALL {
                if !board.is_vacant(pos) {
                    continue;
                }
                board.place(pos, to_move);
                let score = minimax(board, to_move.opponent(), depth + 1, pos);
                board.retract(pos);
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(picture: &str) -> Board {
        Board::from_picture(picture).unwrap()
    }

    #[test]
    fn test_full_board_fails_fast() {
        let mut engine = Engine::seeded(1);
        let full = board("XOX|XOO|OXX");
        assert_eq!(
            engine.choose_move(&full, Sign::Cross, Difficulty::Impossible),
            Err(EngineError::NoLegalMoves)
        );
        assert_eq!(
            engine.choose_move(&full, Sign::Cross, Difficulty::Easy),
            Err(EngineError::NoLegalMoves)
        );
    }

    #[test]
    fn test_immediate_win_scores_highest() {
        let scores = evaluate(&board("XX.|OO.|..."), Sign::Cross);
        let (best, score) = scores.iter().max_by_key(|(_, s)| *s).copied().unwrap();
        assert_eq!(best, Position::TopRight);
        assert_eq!(score, WIN_SCORE);
    }

    #[test]
    fn test_depth_prefers_faster_win() {
        // Cross can win now at 2, or later; the immediate win scores higher.
        let scores = evaluate(&board("XX.|OO.|..."), Sign::Cross);
        for (pos, score) in scores {
            if pos != Position::TopRight {
                assert!(score < WIN_SCORE, "{pos} scored {score}");
            }
        }
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let original = board("X..|.O.|...");
        let mut engine = Engine::seeded(3);
        engine
            .choose_move(&original, Sign::Cross, Difficulty::Impossible)
            .unwrap();
        assert_eq!(original, board("X..|.O.|..."));
    }

    #[test]
    fn test_impossible_opens_in_a_corner() {
        let mut engine = Engine::seeded(7);
        for _ in 0..50 {
            let pos = engine
                .choose_move(&Board::new(), Sign::Cross, Difficulty::Impossible)
                .unwrap();
            assert!(Position::CORNERS.contains(&pos));
        }
    }

    #[test]
    fn test_opening_varies_across_seeds() {
        let picks: std::collections::HashSet<_> = (0..64)
            .map(|seed| {
                Engine::seeded(seed)
                    .choose_move(&Board::new(), Sign::Cross, Difficulty::Normal)
                    .unwrap()
            })
            .collect();
        assert!(picks.len() > 1);
    }

    #[test]
    fn test_never_bypassing_tuning_always_searches() {
        let mut engine = Engine::seeded(11).with_tuning(EngineTuning::new(0.0, 0.0));
        let threatened = board("XX.|O..|...");
        for difficulty in [Difficulty::Normal, Difficulty::Hard] {
            for _ in 0..20 {
                let pos = engine
                    .choose_move(&threatened, Sign::Nought, difficulty)
                    .unwrap();
                assert_eq!(pos, Position::TopRight);
            }
        }
    }

    #[test]
    fn test_always_bypassing_tuning_still_legal() {
        let mut engine = Engine::seeded(5).with_tuning(EngineTuning::new(1.0, 1.0));
        let start = board("XO.|.X.|..O");
        for _ in 0..50 {
            let pos = engine.choose_move(&start, Sign::Cross, Difficulty::Hard).unwrap();
            assert!(start.is_vacant(pos));
        }
    }
}
