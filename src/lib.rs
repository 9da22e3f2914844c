//! m,n,k game engine
//!
//! Tic-tac-toe generalized to a `width x height` board where `win_length`
//! marks in a row win, with a one-ply computer opponent.
//!
//! # Architecture
//!
//! - [`board`]: Board representation and scoped trial moves
//! - [`rules`]: Win and draw detection
//! - [`engine`]: Computer opponent (block, win, else random)
//! - [`game`]: Game sessions and turn sequencing
//! - [`config`]: Game settings from TOML
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use mnk::{Game, GameMode, Outcome};
//!
//! let mut game = Game::with_seed(7);
//! game.start_new_game(GameMode::HumanVsComputer, 3, 3, 3).unwrap();
//!
//! // Human plays the center; the computer replies in the same call
//! let outcome = game.submit_human_move(1, 1);
//! assert_eq!(outcome, Outcome::InProgress);
//! assert_eq!(game.board().unwrap().mark_count(), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rng;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos};
pub use config::GameConfig;
pub use engine::{AIEngine, MoveReason, MoveResult};
pub use error::{ConfigError, GameError};
pub use game::{Game, GameMode, GameSession, Outcome};
