use std::fmt;

use super::types::{Cell, Player};
use crate::error::MoveError;

pub const BOARD_SIZE: usize = 3;

/// The 3×3 game board, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit rows. Turn alternation is not checked.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Put `player`'s mark on an empty cell.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.is_empty(row, col) {
            return Err(MoveError::CellOccupied { row, col });
        }
        self.cells[row][col] = player.into();
        Ok(())
    }

    /// Take back a mark. Paired with `place` during search.
    pub fn remove(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == Cell::Empty
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| *c != Cell::Empty)
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.is_empty(row, col))
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().flatten().filter(|c| **c == cell).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f, "---+---+---")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::X => write!(f, " X ")?,
                    Cell::O => write!(f, " O ")?,
                    Cell::Empty => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
