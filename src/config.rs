//! Game parameters chosen before play starts

use crate::{error::ConfigError, MAX_BOARD_SIZE};

/// The fixed parameters of a game: board edge length, the run length needed
/// to win and the search horizon of the computer player
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub win_condition: usize,
    pub max_depth: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(3, 3, 9)
    }
}

impl GameConfig {
    pub fn new(board_size: usize, win_condition: usize, max_depth: usize) -> Self {
        Self {
            board_size,
            win_condition,
            max_depth,
        }
    }

    /// Checks that a game with these parameters can be played
    ///
    /// A run length longer than the board could never be completed, and an
    /// empty board has no moves to search.
    pub fn validate(self) -> Result<Self, ConfigError> {
        Self::check_board_size(self.board_size)?;
        Self::check_win_condition(self.win_condition, self.board_size)?;
        Ok(self)
    }

    pub fn check_board_size(size: usize) -> Result<usize, ConfigError> {
        if size < 1 || size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(size)
    }

    pub fn check_win_condition(win_condition: usize, size: usize) -> Result<usize, ConfigError> {
        if win_condition < 1 || win_condition > size {
            return Err(ConfigError::WinCondition {
                win_condition,
                size,
            });
        }
        Ok(win_condition)
    }
}
