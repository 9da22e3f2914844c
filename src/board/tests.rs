use super::*;
use crate::error::GameError;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::PlayerA.opponent(), Mark::PlayerB);
    assert_eq!(Mark::PlayerB.opponent(), Mark::PlayerA);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(1, 1);
    assert_eq!(pos.offset((0, 1), 2), Some(Pos::new(1, 3)));
    assert_eq!(pos.offset((-1, 1), 1), Some(Pos::new(0, 2)));
    assert_eq!(pos.offset((-1, 1), 2), None);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(4, 3, 3).unwrap();
    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 3);
    assert_eq!(board.win_length(), 3);
    assert_eq!(board.mark_count(), 0);
    assert_eq!(board.empty_cells().count(), 12);
    assert!(board.positions().all(|pos| board.is_empty(pos)));
}

#[test]
fn test_new_board_rejects_zero_dimensions() {
    for (w, h, k) in [(0, 3, 3), (3, 0, 3), (3, 3, 0), (0, 0, 0)] {
        assert_eq!(
            Board::new(w, h, k),
            Err(GameError::InvalidDimension {
                width: w,
                height: h,
                win_length: k,
            })
        );
    }
}

#[test]
fn test_new_board_rejects_overflowing_cell_count() {
    let width = usize::MAX / 2 + 1;
    assert_eq!(
        Board::new(width, 2, 3),
        Err(GameError::InvalidDimension {
            width,
            height: 2,
            win_length: 3,
        })
    );
    assert!(Board::new(usize::MAX, usize::MAX, 3).is_err());
}

#[test]
fn test_win_length_larger_than_board_is_allowed() {
    assert!(Board::new(3, 3, 7).is_ok());
}

#[test]
fn test_is_in_bounds_non_square() {
    let board = Board::new(5, 2, 3).unwrap();
    assert!(board.is_in_bounds(0, 0));
    assert!(board.is_in_bounds(1, 4));
    assert!(!board.is_in_bounds(2, 0));
    assert!(!board.is_in_bounds(0, 5));
    assert!(!board.is_in_bounds(-1, 0));
    assert!(!board.is_in_bounds(0, -1));
    assert!(!board.is_in_bounds(isize::MIN, isize::MAX));
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new(3, 3, 3).unwrap();
    board.place(Pos::new(2, 1), Mark::PlayerB);

    assert_eq!(board.get(Pos::new(2, 1)), Mark::PlayerB);
    assert!(!board.is_empty(Pos::new(2, 1)));
    assert_eq!(board.mark_count(), 1);
}

#[test]
fn test_checked_cell_lookup() {
    let mut board = Board::new(3, 2, 3).unwrap();
    board.place(Pos::new(1, 2), Mark::PlayerA);

    assert_eq!(board.cell(1, 2), Ok(Mark::PlayerA));
    assert_eq!(board.cell(0, 0), Ok(Mark::Empty));
    assert_eq!(
        board.cell(2, 0),
        Err(GameError::InvalidCellReference {
            row: 2,
            col: 0,
            width: 3,
            height: 2,
        })
    );
}

#[test]
#[should_panic(expected = "outside the 3x3 board")]
fn test_out_of_bounds_access_panics() {
    let board = Board::new(3, 3, 3).unwrap();
    let _ = board.is_empty(Pos::new(3, 0));
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2, 2, 2).unwrap();
    let positions: Vec<Pos> = board.positions().collect();

    for (i, pos) in positions.iter().enumerate() {
        assert!(!board.is_full());
        let mark = if i % 2 == 0 { Mark::PlayerA } else { Mark::PlayerB };
        board.place(*pos, mark);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_positions_row_major() {
    let board = Board::new(2, 2, 2).unwrap();
    let positions: Vec<Pos> = board.positions().collect();
    assert_eq!(
        positions,
        vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]
    );
}

#[test]
fn test_trial_move_rolls_back_on_drop() {
    let mut board = Board::new(3, 3, 3).unwrap();
    let before = board.clone();

    {
        let trial = board.trial(Pos::new(1, 1), Mark::PlayerA);
        assert_eq!(trial.get(Pos::new(1, 1)), Mark::PlayerA);
    }

    assert_eq!(board, before);
}

#[test]
fn test_trial_move_rolls_back_on_early_return() {
    fn peek(board: &mut Board) -> Option<Mark> {
        let trial = board.trial(Pos::new(0, 0), Mark::PlayerB);
        let mark = trial.get(Pos::new(0, 0));
        if mark == Mark::PlayerB {
            return Some(mark);
        }
        None
    }

    let mut board = Board::new(3, 3, 3).unwrap();
    assert_eq!(peek(&mut board), Some(Mark::PlayerB));
    assert!(board.is_empty(Pos::new(0, 0)));
}
