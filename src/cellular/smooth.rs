// src/cellular/smooth.rs

use crate::map::{Grid, OPEN, WALL};

const CARDINALS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

/// Which kind of isolated cell a smoothing pass removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothMode {
    /// Opens free-standing wall nubs that touch other walls only diagonally.
    SmoothDiagonals,
    /// Walls up open cells that are reachable only diagonally.
    FillCubbyHoles,
}

impl SmoothMode {
    /// The cell value this pass looks for.
    pub fn target(self) -> u8 {
        match self {
            SmoothMode::SmoothDiagonals => WALL,
            SmoothMode::FillCubbyHoles => OPEN,
        }
    }

    /// The value an isolated target cell is flipped to.
    pub fn replacement(self) -> u8 {
        match self {
            SmoothMode::SmoothDiagonals => OPEN,
            SmoothMode::FillCubbyHoles => WALL,
        }
    }
}

/// One in-place smoothing pass over the interior (the outermost ring is never
/// examined).
///
/// A cell holding `mode.target()` with no cardinal neighbor of the same value
/// and fewer than `min_diagonals` diagonal neighbors of the same value is
/// flipped. Returns the number of flipped cells; a pass returning 0 has reached
/// a fixed point for these parameters.
pub fn smooth(grid: &mut Grid, min_diagonals: usize, mode: SmoothMode) -> usize {
    let target = mode.target();
    let mut flipped = 0;

    for x in 1..grid.width() - 1 {
        for y in 1..grid.height() - 1 {
            if grid.get(x, y) != target {
                continue;
            }
            if CARDINALS
                .iter()
                .any(|&(dx, dy)| grid.get(x + dx, y + dy) == target)
            {
                continue;
            }
            let diagonals = DIAGONALS
                .iter()
                .filter(|&&(dx, dy)| grid.get(x + dx, y + dy) == target)
                .count();
            if diagonals < min_diagonals {
                match mode.replacement() {
                    OPEN => grid.set(x, y),
                    _ => grid.unset(x, y),
                };
                flipped += 1;
            }
        }
    }
    flipped
}

/// Removes wall cells that are free-standing or joined to other walls only
/// through fewer than `min_diagonals` diagonals.
pub fn smooth_diagonals(grid: &mut Grid, min_diagonals: usize) -> usize {
    smooth(grid, min_diagonals, SmoothMode::SmoothDiagonals)
}

/// Fills open cells joined to open space only through fewer than
/// `min_diagonals` diagonals.
pub fn fill_cubby_holes(grid: &mut Grid, min_diagonals: usize) -> usize {
    smooth(grid, min_diagonals, SmoothMode::FillCubbyHoles)
}
