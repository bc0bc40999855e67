// src/carve/circle.rs

use crate::map::Grid;
use crate::utils::{Circle, Vector2};

/// Opens every cell whose distance to the circle's center is at most its
/// radius. Cells falling outside the grid are clipped. Returns the number of
/// in-bounds cells covered by the disc.
pub fn carve_circle(grid: &mut Grid, circle: &Circle) -> usize {
    let min_x = (circle.center.x - circle.radius).floor() as i32;
    let max_x = (circle.center.x + circle.radius).ceil() as i32;
    let min_y = (circle.center.y - circle.radius).floor() as i32;
    let max_y = (circle.center.y + circle.radius).ceil() as i32;

    let mut carved = 0;
    for x in min_x..=max_x {
        for y in min_y..=max_y {
            if circle.contains(&Vector2::from((x, y))) && grid.set(x, y) {
                carved += 1;
            }
        }
    }
    carved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::OPEN;

    #[test]
    fn test_unit_circle_is_a_plus() {
        let mut grid = Grid::new(5, 5).unwrap();
        let circle = Circle::new(Vector2::new(2.0, 2.0), 1.0).unwrap();
        assert_eq!(carve_circle(&mut grid, &circle), 5);
        assert_eq!(grid.to_string(), "#####\n##.##\n#...#\n##.##\n#####\n");
    }

    #[test]
    fn test_opens_exactly_the_disc() {
        let mut grid = Grid::new(20, 20).unwrap();
        let center = Vector2::new(9.0, 10.0);
        let circle = Circle::new(center, 4.5).unwrap();
        carve_circle(&mut grid, &circle);
        for x in 0..20 {
            for y in 0..20 {
                let inside = center.distance_l2(&Vector2::from((x, y))) <= 4.5;
                assert_eq!(grid.get(x, y) == OPEN, inside, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_clips_at_grid_edges() {
        let mut grid = Grid::new(6, 6).unwrap();
        let circle = Circle::new(Vector2::new(0.0, 0.0), 3.0).unwrap();
        let carved = carve_circle(&mut grid, &circle);
        // Quarter disc of radius 3 on the lattice, including the axes.
        let expected = (0..=3)
            .flat_map(|x| (0..=3).map(move |y| (x, y)))
            .filter(|&(x, y)| x * x + y * y <= 9)
            .count();
        assert_eq!(carved, expected);
        assert_eq!(grid.open_count(), expected);
    }

    #[test]
    fn test_circle_fully_outside_is_noop() {
        let mut grid = Grid::new(4, 4).unwrap();
        let circle = Circle::new(Vector2::new(-20.0, 40.0), 5.0).unwrap();
        assert_eq!(carve_circle(&mut grid, &circle), 0);
        assert_eq!(grid.open_count(), 0);
    }
}
