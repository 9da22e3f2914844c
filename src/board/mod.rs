//! Board representation for the m,n,k game

pub mod board;
pub mod trial;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use trial::TrialMove;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    /// First player; the human in human-vs-computer games
    PlayerA,
    /// Second player; the computer in human-vs-computer games
    PlayerB,
}

impl Mark {
    /// Get the other player's mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB => Mark::PlayerA,
            Mark::Empty => Mark::Empty,
        }
    }
}

/// Position on the board. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `n` cells along a direction, or `None` when the result would be negative
    #[inline]
    pub fn offset(self, (dr, dc): (isize, isize), n: isize) -> Option<Pos> {
        let row = self.row.checked_add_signed(dr * n)?;
        let col = self.col.checked_add_signed(dc * n)?;
        Some(Pos { row, col })
    }
}
