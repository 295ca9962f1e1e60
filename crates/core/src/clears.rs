//! Line-clear engine
//!
//! Full rows and full columns are found first and cleared afterwards, so a cell
//! sitting on both a full row and a full column counts toward both.

use arrayvec::ArrayVec;
use log::debug;

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::scoring::calculate_clear_score;
use crate::types::GRID_SIZE;

/// Indices of cleared lines along one axis
pub type ClearedLines = ArrayVec<u8, { GRID_SIZE as usize }>;

/// Outcome of one clear pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearResult {
    /// Cleared row indices (ascending)
    pub rows: ClearedLines,
    /// Cleared column indices (ascending)
    pub columns: ClearedLines,
    /// Score awarded for this pass
    pub score: u32,
}

impl ClearResult {
    /// Total number of lines cleared on both axes
    pub fn lines(&self) -> usize {
        self.rows.len() + self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }
}

/// Scan for full rows and columns without touching the grid
pub fn find_full_lines(grid: &Grid) -> (ClearedLines, ClearedLines) {
    let size = GRID_SIZE as usize;
    let rows = (0..size)
        .filter(|&y| grid.is_row_full(y))
        .map(|y| y as u8)
        .collect();
    let columns = (0..size)
        .filter(|&x| grid.is_column_full(x))
        .map(|x| x as u8)
        .collect();
    (rows, columns)
}

/// Clear every full row and column and score the pass
///
/// Call exactly once after each commit. A grid without full lines is left
/// untouched and scores 0.
pub fn resolve_clears(grid: &mut Grid, rng: &mut SimpleRng) -> ClearResult {
    let (rows, columns) = find_full_lines(grid);
    if rows.is_empty() && columns.is_empty() {
        return ClearResult::default();
    }

    for &y in &rows {
        grid.clear_row(y as usize);
    }
    for &x in &columns {
        grid.clear_column(x as usize);
    }

    let score = calculate_clear_score(columns.len(), rows.len(), rng);
    debug!(
        "cleared rows {:?} columns {:?} for {} points",
        rows.as_slice(),
        columns.as_slice(),
        score
    );

    ClearResult {
        rows,
        columns,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockColor;

    #[test]
    fn test_crossing_lines_share_a_cell() {
        let mut grid = Grid::new();
        for i in 0..8 {
            grid.set_cell(i, 5, BlockColor::Red);
            grid.set_cell(2, i, BlockColor::Blue);
        }
        let mut rng = SimpleRng::new(9);
        let result = resolve_clears(&mut grid, &mut rng);

        assert_eq!(result.rows.as_slice(), &[5]);
        assert_eq!(result.columns.as_slice(), &[2]);
        assert_eq!(result.lines(), 2);
        assert!((151..=249).contains(&result.score));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_find_full_lines_is_read_only() {
        let mut grid = Grid::new();
        for x in 0..8 {
            grid.set_cell(x, 0, BlockColor::Cyan);
        }
        let before = grid.clone();
        let (rows, columns) = find_full_lines(&grid);
        assert_eq!(rows.as_slice(), &[0]);
        assert!(columns.is_empty());
        assert_eq!(grid, before);
    }
}
