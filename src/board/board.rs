//! Rectangular board stored as a single row-major buffer

use super::{Mark, Pos, TrialMove};
use crate::error::GameError;

/// Game board of `width x height` cells with a fixed win length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    win_length: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`GameError::InvalidDimension`] if any argument is zero or
    /// the cell count does not fit in memory.
    pub fn new(width: usize, height: usize, win_length: usize) -> Result<Self, GameError> {
        let cell_count = width
            .checked_mul(height)
            .filter(|&n| n > 0 && win_length > 0 && n <= isize::MAX as usize);
        let Some(cell_count) = cell_count else {
            return Err(GameError::InvalidDimension {
                width,
                height,
                win_length,
            });
        };

        Ok(Self {
            width,
            height,
            win_length,
            cells: vec![Mark::Empty; cell_count],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Check signed coordinates against the grid. Never panics.
    #[inline]
    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Convert signed coordinates to a position if they are on the board
    pub fn pos(&self, row: isize, col: isize) -> Option<Pos> {
        self.is_in_bounds(row, col)
            .then(|| Pos::new(row as usize, col as usize))
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Buffer index for a position.
    ///
    /// Out-of-bounds access is a bug in the caller, not a game condition.
    #[inline]
    fn index(&self, pos: Pos) -> usize {
        if !self.contains(pos) {
            panic!("{}", self.invalid_cell(pos.row as isize, pos.col as isize));
        }
        pos.row * self.width + pos.col
    }

    fn invalid_cell(&self, row: isize, col: isize) -> GameError {
        GameError::InvalidCellReference {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }

    /// Get the mark at a position. Panics if out of bounds.
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[self.index(pos)]
    }

    /// Checked lookup for callers holding raw coordinates
    pub fn cell(&self, row: isize, col: isize) -> Result<Mark, GameError> {
        self.pos(row, col)
            .map(|pos| self.get(pos))
            .ok_or_else(|| self.invalid_cell(row, col))
    }

    /// Check if position is empty. Panics if out of bounds.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Set a cell. Whether the move is legal is the caller's concern.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        let idx = self.index(pos);
        self.cells[idx] = mark;
    }

    /// No empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }

    /// Number of non-empty cells
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }

    /// All positions, top row left-to-right, then the next row
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Pos::new(row, col)))
    }

    /// All cells with their marks in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells()
            .filter(|&(_, mark)| mark == Mark::Empty)
            .map(|(pos, _)| pos)
    }

    /// Place `mark` at `pos` until the returned guard is dropped.
    ///
    /// The guard derefs to the board so the hypothetical position can be
    /// evaluated; the cell's previous contents come back on every exit path.
    pub fn trial(&mut self, pos: Pos, mark: Mark) -> TrialMove<'_> {
        TrialMove::new(self, pos, mark)
    }
}
