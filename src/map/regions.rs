// src/map/regions.rs
// Connectivity queries over open cells.

use std::collections::VecDeque;

use crate::map::grid::row_major_index;
use crate::map::Grid;

const CARDINALS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Marks every open cell 4-connected to `(x, y)`. The result is indexed
/// row-major like the grid; it is all `false` if the start is a wall or out
/// of bounds.
pub fn flood_fill(grid: &Grid, x: i32, y: i32) -> Vec<bool> {
    let width = grid.width();
    let mut reached = vec![false; grid.cell_count()];
    if !grid.is_open(x, y) {
        return reached;
    }

    let mut queue = VecDeque::new();
    reached[row_major_index(x, y, width)] = true;
    queue.push_back((x, y));

    while let Some((cx, cy)) = queue.pop_front() {
        for (dx, dy) in CARDINALS {
            let (nx, ny) = (cx + dx, cy + dy);
            if grid.is_open(nx, ny) {
                let index = row_major_index(nx, ny, width);
                if !reached[index] {
                    reached[index] = true;
                    queue.push_back((nx, ny));
                }
            }
        }
    }
    reached
}

/// Returns `true` if every point is open and all of them share one
/// 4-connected open region. An empty list is trivially connected.
pub fn all_connected(grid: &Grid, points: &[(i32, i32)]) -> bool {
    let Some(&(sx, sy)) = points.first() else {
        return true;
    };
    let reached = flood_fill(grid, sx, sy);
    points.iter().all(|&(x, y)| {
        grid.in_bounds(x, y) && reached[row_major_index(x, y, grid.width())]
    })
}
