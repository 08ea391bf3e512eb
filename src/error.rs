//! Errors raised by the game engine

/// A move that cannot be applied to the board.
///
/// Coordinates are 1-indexed, as the player types them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, ({row}, {col}) is outside the board. Rows and columns must be between 1 and {size}")]
    OutOfRange { row: usize, col: usize, size: usize },

    #[error("Invalid move, ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    #[error("could not parse '{0}' as a row or column number")]
    Parse(String),
}

/// A game configuration that the engine refuses to play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be between 1 and {max}, got {size}")]
    BoardSize { size: usize, max: usize },

    #[error("win condition must be between 1 and the board size ({size}), got {win_condition}")]
    WinCondition { win_condition: usize, size: usize },
}
