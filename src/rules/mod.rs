//! Game rules for the m,n,k game
//!
//! - Win conditions (a run of `win_length` marks on any of four axes)
//! - Draw conditions (full board, no win for the last mover)

pub mod draw;
pub mod win;

// Re-exports for convenient access
pub use draw::is_draw;
pub use win::{find_winning_line, has_win};
