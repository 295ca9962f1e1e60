//! Grid module - the 8x8 playing field
//!
//! Each cell is empty or filled with a block color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..7 (left to right), y ranges 0..7 (top to bottom)
//!
//! Two families of accessors exist:
//! - `get` / `is_vacant` are bounds-checked and never panic; validators use them.
//! - `cell_at` / `set_cell` / `clear_cell` require in-bounds coordinates and fail
//!   fast otherwise. Reaching them out of bounds is a caller bug.

use crate::types::{BlockColor, Cell, GRID_CELLS, GRID_SIZE};

/// The playing field - 8 columns x 8 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (GRID_SIZE as usize) + (x as usize))
    }

    /// Check if (x, y) lies on the grid
    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        (0..GRID_SIZE as i8).contains(&x) && (0..GRID_SIZE as i8).contains(&y)
    }

    /// Get width/height of the grid
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Get cell at an in-bounds position
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the grid.
    pub fn cell_at(&self, x: i8, y: i8) -> Cell {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx],
            None => panic!("cell_at({x}, {y}) is outside the {GRID_SIZE}x{GRID_SIZE} grid"),
        }
    }

    /// Fill the cell at (x, y) with a color
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the grid.
    pub fn set_cell(&mut self, x: i8, y: i8, color: BlockColor) {
        self.write(x, y, Some(color));
    }

    /// Reset the cell at (x, y) to empty
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the grid.
    pub fn clear_cell(&mut self, x: i8, y: i8) {
        self.write(x, y, None);
    }

    fn write(&mut self, x: i8, y: i8, cell: Cell) {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx] = cell,
            None => panic!("write to ({x}, {y}) is outside the {GRID_SIZE}x{GRID_SIZE} grid"),
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_vacant(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_SIZE as usize {
            return false;
        }
        let start = y * GRID_SIZE as usize;
        let end = start + GRID_SIZE as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_column_full(&self, x: usize) -> bool {
        if x >= GRID_SIZE as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(x)
            .step_by(GRID_SIZE as usize)
            .all(|cell| cell.is_some())
    }

    /// Reset every cell of a row to empty (no shifting)
    pub fn clear_row(&mut self, y: usize) {
        if y >= GRID_SIZE as usize {
            return;
        }
        let start = y * GRID_SIZE as usize;
        let end = start + GRID_SIZE as usize;
        self.cells[start..end].fill(None);
    }

    /// Reset every cell of a column to empty
    pub fn clear_column(&mut self, x: usize) {
        if x >= GRID_SIZE as usize {
            return;
        }
        for cell in self.cells.iter_mut().skip(x).step_by(GRID_SIZE as usize) {
            *cell = None;
        }
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array (`[y][x]`)
    pub fn write_rows(&self, out: &mut [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize]) {
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks_exact(GRID_SIZE as usize)) {
            row.copy_from_slice(chunk);
        }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
