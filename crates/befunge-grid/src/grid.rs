//! Rectangular character grid with wrap-around indexing.
//!
//! Rows are split on `\n` only and right-padded with spaces to the width
//! of the longest row. Every coordinate handed to [`Grid::read`] or
//! [`Grid::write`] is normalized first, so no coordinate is ever invalid.

use serde::{Deserialize, Serialize};

/// The no-op cell used to pad short rows.
pub const PADDING: char = ' ';

/// Normalize `coord` into `[0, dim)`.
///
/// For a coordinate at most one dimension out of range this is "add `dim`
/// once if negative, then take the remainder"; the Euclidean remainder
/// extends that to every integer. `dim` must be non-zero.
pub fn wrap(coord: i64, dim: usize) -> usize {
    coord.rem_euclid(dim as i64) as usize
}

/// The program grid. Owned by a single engine and mutated by `p`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Parse source text into a rectangular grid.
    ///
    /// Empty input yields a single one-cell row.
    pub fn parse(source: &str) -> Self {
        let mut cells: Vec<Vec<char>> = source
            .split('\n')
            .map(|row| row.chars().collect())
            .collect();
        let width = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

        for row in &mut cells {
            row.resize(width, PADDING);
        }

        Self { cells, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Read the cell at `(x, y)` after wrapping both coordinates.
    pub fn read(&self, x: i64, y: i64) -> char {
        self.cells[wrap(y, self.height())][wrap(x, self.width)]
    }

    /// Overwrite the cell at `(x, y)` after wrapping both coordinates.
    pub fn write(&mut self, x: i64, y: i64, ch: char) {
        let (col, row) = (wrap(x, self.width), wrap(y, self.height()));
        self.cells[row][col] = ch;
    }

    /// Iterate over the rows as owned strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::parse("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_in_range_is_identity() {
        assert_eq!(wrap(0, 4), 0);
        assert_eq!(wrap(3, 4), 3);
    }

    #[test]
    fn test_wrap_one_past_either_edge() {
        assert_eq!(wrap(4, 4), 0);
        assert_eq!(wrap(-1, 4), 3);
    }

    #[test]
    fn test_wrap_far_out_of_range() {
        assert_eq!(wrap(-9, 4), 3);
        assert_eq!(wrap(13, 4), 1);
    }

    #[test]
    fn test_empty_source() {
        let grid = Grid::parse("");
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.read(0, 0), PADDING);
    }

    #[test]
    fn test_write_wraps() {
        let mut grid = Grid::parse("abc\ndef");
        grid.write(-1, 2, 'Z');
        assert_eq!(grid.read(2, 0), 'Z');
    }

    #[test]
    fn test_rows_are_padded() {
        let grid = Grid::parse("ab\nc");
        let rows: Vec<String> = grid.rows().collect();
        assert_eq!(rows, vec!["ab".to_string(), "c ".to_string()]);
    }
}
