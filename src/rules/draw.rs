//! Draw detection

use crate::board::{Board, Mark};

use super::win::has_win;

/// The board is full and the player who just moved did not win.
///
/// Callers check the mover's win first; this repeats the check so a full
/// board with a completed run is never reported as a draw.
pub fn is_draw(board: &Board, last_mover: Mark) -> bool {
    board.is_full() && !has_win(board, last_mover)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn fill(board: &mut Board, rows: &[&str]) {
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::PlayerA,
                    'O' => Mark::PlayerB,
                    _ => Mark::Empty,
                };
                board.place(Pos::new(r, c), mark);
            }
        }
    }

    #[test]
    fn test_full_board_without_win_is_draw() {
        let mut board = Board::new(3, 3, 3).unwrap();
        fill(&mut board, &["XOX", "XOO", "OXX"]);
        assert!(is_draw(&board, Mark::PlayerA));
        assert!(is_draw(&board, Mark::PlayerB));
    }

    #[test]
    fn test_full_board_with_winning_last_move_is_not_draw() {
        let mut board = Board::new(3, 3, 3).unwrap();
        fill(&mut board, &["XOX", "OXO", "OXX"]);
        assert!(board.is_full());
        assert!(!is_draw(&board, Mark::PlayerA));
    }

    #[test]
    fn test_board_with_empty_cell_is_not_draw() {
        let mut board = Board::new(3, 3, 3).unwrap();
        fill(&mut board, &["XOX", "XOO", "OX."]);
        assert!(!is_draw(&board, Mark::PlayerA));
    }
}
