//! Computer opponent
//!
//! The engine looks exactly one move ahead. Cells are scanned in row-major
//! order and, for each empty cell:
//!
//! 1. **Block**: would the opponent win by playing here?
//! 2. **Win**: would the engine win by playing here?
//!
//! The first cell passing either test is played. Both tests run on a cell
//! before the scan moves on, so an early winning cell beats a later blocking
//! one. When no cell qualifies the engine plays a random empty cell.
//!
//! # Example
//!
//! ```
//! use mnk::{AIEngine, Board, Mark, MoveReason, Pos};
//!
//! let mut board = Board::new(3, 3, 3).unwrap();
//! board.place(Pos::new(0, 0), Mark::PlayerA);
//! board.place(Pos::new(0, 1), Mark::PlayerA);
//!
//! let mut engine = AIEngine::with_seed(1);
//! let result = engine.get_move_with_stats(&mut board, Mark::PlayerB).unwrap();
//! assert_eq!(result.pos, Pos::new(0, 2));
//! assert_eq!(result.reason, MoveReason::Block);
//! ```

use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::rng::GameRng;
use crate::rules::has_win;

/// Why the engine picked its move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    /// Denies the opponent an immediate win
    Block,
    /// Completes the engine's own run
    Win,
    /// No block or win available
    Random,
}

/// A chosen move and the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub pos: Pos,
    pub reason: MoveReason,
}

/// One-ply computer opponent with its own random source
#[derive(Debug, Clone)]
pub struct AIEngine {
    rng: GameRng,
}

impl AIEngine {
    /// Create an engine seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Create an engine whose random fallback is reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Get the move for `color`, or `None` if the board is full.
    pub fn get_move(&mut self, board: &mut Board, color: Mark) -> Option<Pos> {
        self.get_move_with_stats(board, color).map(|r| r.pos)
    }

    /// Get the move for `color` together with the reason it was chosen.
    ///
    /// The board is borrowed mutably to try hypothetical marks; it is
    /// unchanged when this returns.
    pub fn get_move_with_stats(&mut self, board: &mut Board, color: Mark) -> Option<MoveResult> {
        let opponent = color.opponent();
        let positions: Vec<Pos> = board.positions().collect();

        for pos in positions {
            if !board.is_empty(pos) {
                continue;
            }

            let reason = if wins_at(board, pos, opponent) {
                MoveReason::Block
            } else if wins_at(board, pos, color) {
                MoveReason::Win
            } else {
                continue;
            };

            debug!(row = pos.row, col = pos.col, ?reason, "engine move");
            return Some(MoveResult { pos, reason });
        }

        let empty: Vec<Pos> = board.empty_cells().collect();
        let pos = *self.rng.choose(&empty)?;
        debug!(row = pos.row, col = pos.col, reason = ?MoveReason::Random, "engine move");
        Some(MoveResult {
            pos,
            reason: MoveReason::Random,
        })
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Would `mark` win by playing at the empty cell `pos`?
fn wins_at(board: &mut Board, pos: Pos, mark: Mark) -> bool {
    let trial = board.trial(pos, mark);
    has_win(&trial, mark)
}
