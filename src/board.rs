use std::fmt;

use crate::error::MoveError;

/// The forward-facing line directions as (row step, column step): vertical,
/// horizontal, down-right diagonal and down-left diagonal. Every run is found
/// from its first cell, so the mirrored directions are never needed.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A player's symbol. X is always the human, O is always the computer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Cell::from(*self).glyph())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn glyph(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// A 0-indexed board coordinate
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parses a 1-indexed row and column as typed by a player, checking that
    /// both lie on a board of the given size
    pub fn parse_one_indexed(row: &str, col: &str, size: usize) -> Result<Self, MoveError> {
        let parse = |token: &str| {
            token
                .trim()
                .parse::<usize>()
                .map_err(|_| MoveError::Parse(token.to_string()))
        };
        let (row, col) = (parse(row)?, parse(col)?);
        if row < 1 || row > size || col < 1 || col > size {
            return Err(MoveError::OutOfRange { row, col, size });
        }
        Ok(Self::new(row - 1, col - 1))
    }
}

impl fmt::Display for Move {
    /// Formats the move 1-indexed, as the player would type it
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// A square grid of cells with the run length needed to win
///
/// Cells are stored row-major. The dimensions are fixed at construction.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    size: usize,
    win_condition: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize, win_condition: usize) -> Self {
        Self {
            size,
            win_condition,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_condition(&self) -> usize {
        self.win_condition
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Puts `mark` on an empty cell
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        match self.cell(row, col) {
            None => Err(MoveError::OutOfRange {
                row: row.saturating_add(1),
                col: col.saturating_add(1),
                size: self.size,
            }),
            Some(Cell::Empty) => {
                self.cells[row * self.size + col] = mark.into();
                Ok(())
            }
            Some(_) => Err(MoveError::Occupied {
                row: row + 1,
                col: col + 1,
            }),
        }
    }

    /// Resets a cell to empty. Coordinates off the board are ignored.
    pub fn clear(&mut self, row: usize, col: usize) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = Cell::Empty;
        }
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(idx, _)| Move::new(idx / self.size, idx % self.size))
    }

    /// Checks every cell and direction for a run of `win_condition` cells
    /// holding `mark`
    pub fn wins_for(&self, mark: Mark) -> bool {
        let target = Cell::from(mark);
        for row in 0..self.size {
            for col in 0..self.size {
                for &(d_row, d_col) in DIRECTIONS.iter() {
                    if self.run_from(row, col, d_row, d_col, target) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn run_from(&self, row: usize, col: usize, d_row: isize, d_col: isize, target: Cell) -> bool {
        (0..self.win_condition as isize).all(|step| {
            let r = row as isize + step * d_row;
            let c = col as isize + step * d_col;
            r >= 0 && c >= 0 && self.cell(r as usize, c as usize) == Some(target)
        })
    }

    /// Lines of text showing the board, produced on demand
    ///
    /// Cells in a row are separated by `|`, rows by a line of `-` joined with `+`.
    /// The iterator can be cloned to replay the snapshot.
    pub fn render(&self) -> impl Iterator<Item = String> + Clone + '_ {
        (0..self.size).flat_map(move |row| {
            std::iter::once(self.row_line(row))
                .chain((row + 1 < self.size).then(|| self.separator_line()))
        })
    }

    fn row_line(&self, row: usize) -> String {
        let glyphs: Vec<String> = self.cells[row * self.size..(row + 1) * self.size]
            .iter()
            .map(|cell| cell.glyph().to_string())
            .collect();
        glyphs.join("|")
    }

    fn separator_line(&self) -> String {
        vec!["-"; self.size].join("+")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
