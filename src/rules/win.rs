//! Win condition checking
//!
//! A mark wins when it holds `win_length` consecutive cells along a row, a
//! column, or either diagonal. Runs are counted forward from every cell that
//! holds the mark and stop at the board edge; nothing wraps around.

use crate::board::{Board, Mark, Pos};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (-1, 1), // Diagonal up-right
];

/// Check if `mark` has a winning run anywhere on the board
pub fn has_win(board: &Board, mark: Mark) -> bool {
    first_run(board, mark).is_some()
}

/// Find the cells of the first winning run, scanning row-major.
///
/// Returns exactly `win_length` positions ordered from the anchor cell along
/// the run direction.
pub fn find_winning_line(board: &Board, mark: Mark) -> Option<Vec<Pos>> {
    let (start, dir) = first_run(board, mark)?;
    (0..board.win_length() as isize)
        .map(|i| start.offset(dir, i))
        .collect()
}

/// Anchor and direction of the first run found
fn first_run(board: &Board, mark: Mark) -> Option<(Pos, (isize, isize))> {
    // A run longer than the longest side cannot fit anywhere
    if mark == Mark::Empty || board.win_length() > board.width().max(board.height()) {
        return None;
    }

    board
        .cells()
        .filter(|&(_, m)| m == mark)
        .find_map(|(pos, _)| {
            DIRECTIONS
                .iter()
                .find(|&&dir| is_run(board, pos, dir, mark))
                .map(|&dir| (pos, dir))
        })
}

/// Whether `win_length` cells starting at `start` along `dir` all hold `mark`
fn is_run(board: &Board, start: Pos, dir: (isize, isize), mark: Mark) -> bool {
    (0..board.win_length() as isize).all(|i| {
        start
            .offset(dir, i)
            .is_some_and(|p| board.contains(p) && board.get(p) == mark)
    })
}
