// src/cellular/acid.rs

use std::collections::BTreeSet;

use log::trace;
use rand::Rng;

use crate::map::{Grid, OPEN, WALL};

const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Interior wall cells with at least one open cell among their 8 neighbors.
pub(crate) fn boundary_cells(grid: &Grid) -> BTreeSet<(i32, i32)> {
    let mut boundary = BTreeSet::new();
    for x in 1..grid.width() - 1 {
        for y in 1..grid.height() - 1 {
            if grid.get(x, y) != WALL {
                continue;
            }
            if NEIGHBORS
                .iter()
                .any(|&(dx, dy)| grid.is_open(x + dx, y + dy))
            {
                boundary.insert((x, y));
            }
        }
    }
    boundary
}

fn adjacent_walls(grid: &Grid, x: i32, y: i32) -> Vec<(i32, i32)> {
    NEIGHBORS
        .iter()
        .map(|&(dx, dy)| (x + dx, y + dy))
        .filter(|&(nx, ny)| matches!(grid.try_get(nx, ny), Ok(WALL)))
        .collect()
}

/// Randomly eats away at the walls bordering open space.
///
/// Each round, every frontier cell draws a uniform value in `[0, 1)` and is
/// opened if the draw exceeds `base_probability * adjacent_walls`, so cells
/// buried deeper in rock survive more often. Opened cells hand their wall
/// neighbors to the next round's frontier; survivors are never retried.
/// `iterations == 0` only computes the initial frontier.
///
/// Returns the number of cells opened.
pub fn wall_acid<R: Rng>(
    grid: &mut Grid,
    base_probability: f64,
    iterations: usize,
    rng: &mut R,
) -> usize {
    let mut boundary = boundary_cells(grid);
    let mut opened = 0;

    for round in 0..iterations {
        if boundary.is_empty() {
            break;
        }
        trace!("Wall acid round {}: {} frontier cells", round, boundary.len());

        let mut next_boundary = BTreeSet::new();
        for (x, y) in boundary {
            // Opened earlier this round as a neighbor's neighbor.
            if grid.get(x, y) == OPEN {
                continue;
            }
            let walls = adjacent_walls(grid, x, y);
            let survival_threshold = base_probability * walls.len() as f64;
            if rng.random::<f64>() > survival_threshold {
                grid.set(x, y);
                opened += 1;
                next_boundary.extend(walls);
            }
        }
        boundary = next_boundary;
    }
    opened
}
