//! Scoped hypothetical moves

use std::ops::Deref;

use super::{Board, Mark, Pos};

/// A mark placed for evaluation only, removed when the guard drops
#[derive(Debug)]
pub struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Pos,
    previous: Mark,
}

impl<'a> TrialMove<'a> {
    pub(super) fn new(board: &'a mut Board, pos: Pos, mark: Mark) -> Self {
        let previous = board.get(pos);
        debug_assert_eq!(previous, Mark::Empty, "trial move on occupied cell {:?}", pos);
        board.place(pos, mark);
        Self {
            board,
            pos,
            previous,
        }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.place(self.pos, self.previous);
    }
}
