// src/map/grid.rs

use std::fmt;

use crate::error::{CaveError, Result};

/// Cell value for solid rock.
pub const WALL: u8 = 0;
/// Cell value for walkable space.
pub const OPEN: u8 = 1;

/// Row-major offset of `(x, y)`, computed in `usize` so grids with more than
/// `i32::MAX` cells index correctly. Callers check bounds first.
pub(crate) fn row_major_index(x: i32, y: i32, width: i32) -> usize {
    x as usize + y as usize * width as usize
}

/// A mutable 2D binary map stored row-major (`index = x + y * width`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates a grid with every cell walled.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(CaveError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![WALL; (width as usize) * (height as usize)],
        })
    }

    /// Creates a same-sized, fully walled grid.
    pub fn blank_like(other: &Grid) -> Self {
        Self {
            width: other.width,
            height: other.height,
            cells: vec![WALL; other.cells.len()],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn index_of(&self, x: i32, y: i32) -> Result<usize> {
        if self.in_bounds(x, y) {
            Ok(row_major_index(x, y, self.width))
        } else {
            Err(CaveError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Opens the cell. Coordinates outside the grid are clipped; returns
    /// whether a cell was written.
    pub fn set(&mut self, x: i32, y: i32) -> bool {
        self.write(x, y, OPEN)
    }

    /// Walls the cell. Clips like [`Grid::set`].
    pub fn unset(&mut self, x: i32, y: i32) -> bool {
        self.write(x, y, WALL)
    }

    fn write(&mut self, x: i32, y: i32, value: u8) -> bool {
        match self.index_of(x, y) {
            Ok(index) => {
                self.cells[index] = value;
                true
            }
            Err(_) => false,
        }
    }

    /// Returns `OPEN` or `WALL`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid. Use [`Grid::try_get`] when
    /// the coordinate is not known to be valid.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        assert!(
            self.in_bounds(x, y),
            "cell ({}, {}) is outside a {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.cells[row_major_index(x, y, self.width)]
    }

    pub fn try_get(&self, x: i32, y: i32) -> Result<u8> {
        self.index_of(x, y).map(|index| self.cells[index])
    }

    pub fn is_open(&self, x: i32, y: i32) -> bool {
        matches!(self.try_get(x, y), Ok(OPEN))
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == OPEN).count()
    }

    /// ORs `other` into this grid over the overlapping rectangle
    /// `[0, min(width)) x [0, min(height))`. Cells outside the overlap are
    /// left untouched.
    pub fn or_with(&mut self, other: &Grid) {
        self.combine(other, |a, b| a | b);
    }

    /// ANDs `other` into this grid over the overlapping rectangle.
    pub fn and_with(&mut self, other: &Grid) {
        self.combine(other, |a, b| a & b);
    }

    fn combine(&mut self, other: &Grid, op: impl Fn(u8, u8) -> u8) {
        let width = self.width.min(other.width);
        let height = self.height.min(other.height);
        for y in 0..height {
            for x in 0..width {
                let index = row_major_index(x, y, self.width);
                self.cells[index] = op(self.cells[index], other.get(x, y));
            }
        }
    }
}

impl fmt::Display for Grid {
    /// One line per row, `.` for open and `#` for wall.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for &cell in row {
                f.write_str(if cell == OPEN { "." } else { "#" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len() as i32, rows.len() as i32).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '.' {
                    grid.set(x as i32, y as i32);
                }
            }
        }
        grid
    }

    #[test]
    fn test_new_grid_is_all_walls() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(grid.to_string(), "#####\n".repeat(5));
        assert_eq!(grid.open_count(), 0);
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(CaveError::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(Grid::new(5, -1).is_err());
    }

    #[test]
    fn test_set_single_cell_renders() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(grid.set(2, 2));
        assert_eq!(grid.to_string(), "#####\n#####\n##.##\n#####\n#####\n");
        assert_eq!(grid.get(2, 2), OPEN);
        grid.unset(2, 2);
        assert_eq!(grid.get(2, 2), WALL);
    }

    #[test]
    fn test_render_is_row_major() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 0);
        grid.set(0, 1);
        assert_eq!(grid.to_string(), "##.\n.##\n");
    }

    #[test]
    fn test_mutators_clip_out_of_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(!grid.set(-1, 0));
        assert!(!grid.set(3, 0));
        assert!(!grid.unset(0, 7));
        assert_eq!(grid.open_count(), 0);
        assert!(matches!(
            grid.try_get(3, 3),
            Err(CaveError::OutOfBounds { x: 3, y: 3, .. })
        ));
        assert!(!grid.is_open(-5, -5));
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(3, 3).unwrap();
        grid.get(3, 0);
    }

    #[test]
    fn test_or_with_only_touches_overlap() {
        let mut big = Grid::new(4, 4).unwrap();
        let small = grid_from(&["..", ".."]);
        big.or_with(&small);
        assert_eq!(big.to_string(), "..##\n..##\n####\n####\n");

        // A smaller target ignores the excess of a bigger source.
        let mut small = Grid::new(2, 2).unwrap();
        let big = grid_from(&["....", "....", "....", "...."]);
        small.or_with(&big);
        assert_eq!(small.to_string(), "..\n..\n");
    }

    #[test]
    fn test_and_with_only_touches_overlap() {
        let mut target = grid_from(&["....", "....", "...."]);
        let mask = grid_from(&[".#", "#."]);
        target.and_with(&mask);
        assert_eq!(target.to_string(), ".#..\n#...\n....\n");
    }

    #[test]
    fn test_row_major_index_past_i32_range() {
        // 50_000 x 50_000 cells overflows an i32 offset.
        assert_eq!(row_major_index(49_999, 49_999, 50_000), 2_499_999_999);
        assert_eq!(row_major_index(3, 2, 5), 13);
    }

    #[test]
    fn test_blank_like() {
        let source = grid_from(&["..#", "#.."]);
        let blank = Grid::blank_like(&source);
        assert_eq!(blank.width(), 3);
        assert_eq!(blank.height(), 2);
        assert_eq!(blank.open_count(), 0);
    }
}
