//! # Pattern Grid
//!
//! Row-major boolean occupancy grid. A `true` cell is extruded into a cube.

use crate::error::{MeshError, MeshResult};
use serde::{Deserialize, Serialize};

/// A 2D dot pattern.
///
/// The grid always holds exactly `height` rows of exactly `width` cells;
/// constructors and deserialization reject anything else.
///
/// # Example
///
/// ```rust
/// use pattern_mesh::PatternGrid;
///
/// let grid = PatternGrid::from_rows(vec![
///     vec![true, false, true],
///     vec![false, true, false],
/// ]).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.occupied_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct PatternGrid {
    width: usize,
    height: usize,
    data: Vec<Vec<bool>>,
}

/// Unchecked wire shape, validated through `TryFrom`.
#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    data: Vec<Vec<bool>>,
}

impl TryFrom<RawGrid> for PatternGrid {
    type Error = MeshError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height, raw.data)
    }
}

impl PatternGrid {
    /// Creates a grid, checking that `data` has `height` rows of `width` cells.
    pub fn new(width: usize, height: usize, data: Vec<Vec<bool>>) -> MeshResult<Self> {
        if data.len() != height {
            return Err(MeshError::invalid_grid(format!(
                "expected {height} rows, found {}",
                data.len()
            )));
        }
        if let Some((y, row)) = data.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(MeshError::invalid_grid(format!(
                "row {y} has {} cells, expected {width}",
                row.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a grid from rows, inferring the dimensions from the first row.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> MeshResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        Self::new(width, height, rows)
    }

    /// Creates a grid with every cell unoccupied.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![vec![false; width]; height],
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cell data.
    #[inline]
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.data
    }

    /// Returns whether the cell at `(x, y)` is occupied.
    ///
    /// Coordinates outside the grid are unoccupied.
    #[inline]
    pub fn is_occupied(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.data
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Iterates over occupied cells as `(x, y)` in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.data.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, occupied)| **occupied)
                .map(move |(x, _)| (x, y))
        })
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.data
            .iter()
            .map(|row| row.iter().filter(|cell| **cell).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_row_count() {
        let err = PatternGrid::new(2, 3, vec![vec![true, false]]).unwrap_err();
        assert!(matches!(err, MeshError::InvalidGrid { .. }));
        assert!(err.to_string().contains("expected 3 rows"));
    }

    #[test]
    fn test_new_rejects_ragged_row() {
        let err = PatternGrid::new(2, 2, vec![vec![true, false], vec![true]]).unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 cells"));
    }

    #[test]
    fn test_from_rows_empty() {
        let grid = PatternGrid::from_rows(Vec::new()).unwrap();
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_is_occupied_out_of_bounds() {
        let grid = PatternGrid::from_rows(vec![vec![true]]).unwrap();
        assert!(grid.is_occupied(0, 0));
        assert!(!grid.is_occupied(-1, 0));
        assert!(!grid.is_occupied(0, -1));
        assert!(!grid.is_occupied(1, 0));
        assert!(!grid.is_occupied(0, 1));
    }

    #[test]
    fn test_occupied_cells_row_major() {
        let grid = PatternGrid::from_rows(vec![
            vec![false, true],
            vec![true, true],
        ])
        .unwrap();
        let cells: Vec<_> = grid.occupied_cells().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1)]);
        assert_eq!(grid.occupied_count(), 3);
    }
}
