// src/carve/bezier.rs
// Tunnel rasterization along quadratic Bezier curves.

use rand::Rng;

use crate::cellular::wall_acid;
use crate::map::Grid;
use crate::utils::Vector2;

/// The "+" stamp used for walkable tunnels: a 3x3 block minus its corners.
const PLUS_STAMP: [(i32, i32); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Evaluates the quadratic curve through `a`, `b`, `c` at `t` as two composed
/// linear interpolations. With [`Vector2::lerp`]'s direction, `t = 0` lands
/// on `c` and `t = 1` on `a`.
pub fn quadratic_point(a: Vector2, b: Vector2, c: Vector2, t: f64) -> Vector2 {
    let p0 = a.lerp(b, t);
    let p1 = b.lerp(c, t);
    p0.lerp(p1, t)
}

/// Step size along the curve parameter: half a cell of the grid's longer axis.
fn step_size(grid: &Grid) -> f64 {
    0.5 / grid.width().max(grid.height()) as f64
}

/// Number of samples taken along a curve, `ceil(1 / dt)`: two per cell along
/// the grid's longer axis, so consecutive samples never skip a cell.
pub fn sample_count(grid: &Grid) -> usize {
    2 * grid.width().max(grid.height()) as usize
}

/// Carves the path of the quadratic Bezier curve `a`, `b`, `c`.
///
/// With `thin` unset every sample opens a "+" of five cells, wide enough to
/// walk. With `thin` set only the sampled cell opens, leaving the tunnel's
/// final shape to a later erosion pass. Samples outside the grid are clipped.
pub fn carve_bezier(grid: &mut Grid, a: Vector2, b: Vector2, c: Vector2, thin: bool) {
    let steps = sample_count(grid);
    let dt = step_size(grid);

    let mut t = 0.0;
    for _ in 0..steps {
        let (x, y) = quadratic_point(a, b, c, t).floor_cell();
        if thin {
            grid.set(x, y);
        } else {
            for (dx, dy) in PLUS_STAMP {
                grid.set(x + dx, y + dy);
            }
        }
        t += dt;
    }
}

/// Carves a thin curve into a scratch grid, erodes only that scratch grid
/// with [`wall_acid`], then ORs the result into `grid`. Regions already
/// carved in `grid` are never exposed to the acid.
pub fn carve_cavern_bezier<R: Rng>(
    grid: &mut Grid,
    a: Vector2,
    b: Vector2,
    c: Vector2,
    base_probability: f64,
    iterations: usize,
    rng: &mut R,
) {
    let mut scratch = Grid::blank_like(grid);
    carve_bezier(&mut scratch, a, b, c, true);
    wall_acid(&mut scratch, base_probability, iterations, rng);
    grid.or_with(&scratch);
}
