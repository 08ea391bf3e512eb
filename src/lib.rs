//! An agent for playing generalised tic-tac-toe ('N in a row' on an MxM board)
//!
//! The computer player uses an exhaustive, depth-limited minimax search to
//! pick its move. Plies beyond the depth limit are scored as neutral, so the
//! agent is only as strong as its search horizon allows.
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe_ai::{config::GameConfig, board::{Mark, Move}, solver::GameState};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = GameState::new(GameConfig::new(3, 3, 9))?;
//! game.place(0, 0, Mark::X)?;
//! game.place(1, 1, Mark::O)?;
//! game.place(0, 1, Mark::X)?;
//!
//! // O has to block the top row
//! assert_eq!(game.best_move(), Some(Move::new(0, 2)));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod config;

pub mod board;

pub mod solver;


/// The largest supported board edge length in cells
pub const MAX_BOARD_SIZE: usize = 32;

/// The score of a win found at the root of the search, before depth is subtracted
pub const WIN_SCORE: i32 = 10;

// ensure that search depths (bounded by the number of cells) fit in a score
const_assert!(MAX_BOARD_SIZE * MAX_BOARD_SIZE < i32::MAX as usize);
