//! The computer player: an exhaustive, depth-limited minimax search

use crate::{
    board::*,
    config::GameConfig,
    error::{ConfigError, MoveError},
    WIN_SCORE,
};

use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};
use std::time::Instant;

use tracing::{debug, info};

/// The state of one game: the board and the computer's search horizon
///
/// # Position Scoring
/// Scores are seen from O, the maximising player. A position O has won scores
/// `10 - depth`, one X has won scores `depth - 10`, where `depth` is the number
/// of plies searched below the root. Faster wins and slower losses are preferred.
/// Full boards and positions at the depth limit score 0, whatever their real
/// outcome.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    max_depth: usize,

    /// The number of positions evaluated by this `GameState` so far (for diagnostics only)
    pub node_count: usize,
}

impl GameState {
    /// Creates an empty game, rejecting configurations that cannot be played
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        Ok(Self {
            board: Board::new(config.board_size, config.win_condition),
            max_depth: config.max_depth,
            node_count: 0,
        })
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        self.board.place(row, col, mark)
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.board.clear(row, col)
    }

    /// Scores the current position with `maximizing` telling whose turn it is
    /// (O when true)
    ///
    /// The board is left exactly as it was found.
    pub fn minimax_value(&mut self, depth: usize, maximizing: bool) -> i32 {
        self.node_count += 1;

        if self.board.wins_for(Mark::O) {
            return WIN_SCORE - depth as i32;
        }
        if self.board.wins_for(Mark::X) {
            return depth as i32 - WIN_SCORE;
        }
        if self.board.is_full() || depth >= self.max_depth {
            return 0;
        }

        let (mark, mut best) = if maximizing {
            (Mark::O, i32::MIN)
        } else {
            (Mark::X, i32::MAX)
        };

        let size = self.board.size();
        for row in 0..size {
            for col in 0..size {
                if self.board.cell(row, col) != Some(Cell::Empty) {
                    continue;
                }
                let score = Hypothetical::place(self, Move::new(row, col), mark)
                    .minimax_value(depth + 1, !maximizing);
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
        }
        best
    }

    /// Searches every empty cell as O's next move
    ///
    /// Returns the best score and the first move (in row-major order) that
    /// reaches it, or `None` if the board is full.
    pub fn solve(&mut self) -> Option<(i32, Move)> {
        let start = Instant::now();
        let nodes_before = self.node_count;

        let mut best: Option<(i32, Move)> = None;
        let candidates: Vec<Move> = self.board.empty_cells().collect();
        for candidate in candidates {
            let score = Hypothetical::place(self, candidate, Mark::O).minimax_value(0, false);
            debug!(row = candidate.row, col = candidate.col, score, "scored candidate move");

            // strict comparison keeps the first move found among equal scores
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, candidate));
            }
        }

        info!(
            nodes = self.node_count - nodes_before,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search finished"
        );
        best
    }

    /// The move the computer should play, or `None` if the board is full
    pub fn best_move(&mut self) -> Option<Move> {
        self.solve().map(|(_, best_move)| best_move)
    }

    /// Converts a score to the number of plies until the forced result it
    /// predicts, counted from the computer's move. Neutral scores give the
    /// number of plies searched before the horizon.
    pub fn score_to_win_distance(&self, score: i32) -> usize {
        match score.cmp(&0) {
            Ordering::Equal => self.max_depth.min(self.board.empty_cells().count()),
            _ => (WIN_SCORE - score.abs()).max(0) as usize + 1,
        }
    }
}

impl Deref for GameState {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}

/// A mark placed for the duration of one search branch
///
/// The cell is cleared again when the guard is dropped, so the board is
/// restored on every way out of the branch.
struct Hypothetical<'a> {
    state: &'a mut GameState,
    placed: Move,
}

impl<'a> Hypothetical<'a> {
    /// Places `mark` on `placed`, which must be empty
    fn place(state: &'a mut GameState, placed: Move, mark: Mark) -> Self {
        debug_assert!(state.board.cell(placed.row, placed.col) == Some(Cell::Empty));
        // the caller only hands over empty in-range cells
        let _ = state.board.place(placed.row, placed.col, mark);
        Self { state, placed }
    }
}

impl Deref for Hypothetical<'_> {
    type Target = GameState;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.state.board.clear(self.placed.row, self.placed.col);
    }
}
