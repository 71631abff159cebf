use super::Player;
use crate::error::GameError;

/// Length of a winning line.
pub const LINE_LENGTH: usize = 4;

/// Ray directions as (row step, column step): horizontal, vertical,
/// diagonal down-right, diagonal down-left.
const RAYS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

/// A `height` x `width` grid. Row 0 is the top, row `height - 1` the floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if height == 0 || width == 0 {
            return Err(GameError::InvalidDimensions { height, width });
        }

        Ok(Board {
            height,
            width,
            cells: vec![vec![Cell::Empty; width]; height],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position, or `None` off the board.
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a piece dropped into `col` would come to rest in, or `None` if the
    /// column is full.
    pub fn landing_row(&self, col: usize) -> Result<Option<usize>, GameError> {
        if col >= self.width {
            return Err(GameError::ColumnOutOfRange {
                column: col,
                width: self.width,
            });
        }

        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty))
    }

    /// Put `player`'s piece at (row, col). The cell must be in bounds and
    /// empty; callers obtain `row` from [`Board::landing_row`].
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), GameError> {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if *cell == Cell::Empty => {
                *cell = player.to_cell();
                Ok(())
            }
            _ => Err(GameError::IllegalPlacement { row, column: col }),
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Scan every cell for a run of four `player` pieces starting there.
    pub fn has_four_in_row(&self, player: Player) -> bool {
        let cell = player.to_cell();
        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                RAYS.iter()
                    .any(|&(dr, dc)| self.ray_matches(row, col, dr, dc, cell))
            })
        })
    }

    fn ray_matches(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        (0..LINE_LENGTH as isize).all(|step| {
            self.cell_at(row as isize + dr * step, col as isize + dc * step) == Some(cell)
        })
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }
}
