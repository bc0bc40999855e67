// src/generator/goblin_halls.rs
// The Goblin Halls: a cluster of round nests joined by bent tunnels, then
// roughened with wall acid and cleaned up by smoothing.

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, info, trace, warn};
use rand::Rng;
use union_find::{QuickUnionUf, UnionBySize, UnionFind};

use crate::carve::{carve_bezier, carve_cavern_bezier, carve_circle};
use crate::cellular::{fill_cubby_holes, smooth_diagonals, wall_acid};
use crate::error::Result;
use crate::generator::{GeneratorConfig, TunnelStyle};
use crate::map::{all_connected, Grid};
use crate::utils::{circle_close, Circle, Vector2};

#[derive(Default, Debug, Clone)]
pub struct GenerationStats {
    pub generation_time: f64,
    pub rooms: Vec<Circle>,
    pub placement_attempts: usize,
    pub link_count: usize,
    pub merge_tunnel_count: usize,
    pub open_cells: usize,
    /// Whether every room center ended up in one open region.
    pub connected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GoblinHalls {
    config: GeneratorConfig,
}

impl GoblinHalls {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(GoblinHalls { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Carves a complete map into `grid`, drawing all randomness from `rng`.
    /// The same grid size, config and seed always produce the same map.
    pub fn generate<R: Rng>(&self, grid: &mut Grid, rng: &mut R) -> GenerationStats {
        let start = Instant::now();

        let (rooms, placement_attempts) = self.place_rooms(grid, rng);
        let links = self.link_nearest(grid, &rooms, rng);
        let merge_tunnel_count = self.merge_components(grid, &rooms, &links, rng);
        self.finish(grid, rng);

        let centers: Vec<(i32, i32)> = rooms.iter().map(|room| room.center.floor_cell()).collect();
        let connected = all_connected(grid, &centers);
        if !connected {
            warn!("Generated map leaves some of its {} rooms unreachable", rooms.len());
        }

        let stats = GenerationStats {
            generation_time: start.elapsed().as_secs_f64(),
            placement_attempts,
            link_count: links.len(),
            merge_tunnel_count,
            open_cells: grid.open_count(),
            connected,
            rooms,
        };
        info!(
            "Generated {}x{} map: {} rooms, {} tunnels, {} open cells in {:.3}s",
            grid.width(),
            grid.height(),
            stats.rooms.len(),
            stats.link_count + stats.merge_tunnel_count,
            stats.open_cells,
            stats.generation_time
        );
        stats
    }

    /// Rejection-samples rooms until the target count is met or the attempt
    /// cap runs out. Each accepted room is carved immediately.
    fn place_rooms<R: Rng>(&self, grid: &mut Grid, rng: &mut R) -> (Vec<Circle>, usize) {
        let config = &self.config;
        let mut rooms: Vec<Circle> = Vec::new();
        let mut attempts = 0;

        while rooms.len() < config.room_target && attempts < config.max_placement_attempts {
            attempts += 1;
            let radius = rng.random_range(config.min_radius..=config.max_radius);
            let (max_x, max_y) = (grid.width() - radius, grid.height() - radius);
            if max_x < radius || max_y < radius {
                // No room of this size fits inside the margins.
                continue;
            }
            let center = Vector2::new(
                rng.random_range(radius..=max_x) as f64,
                rng.random_range(radius..=max_y) as f64,
            );
            // Radius is positive: validated with the config.
            let room = Circle {
                center,
                radius: radius as f64,
            };
            if circle_close(&room, &rooms, config.min_separation) {
                continue;
            }

            carve_circle(grid, &room);
            debug!(
                "Placed room {} at ({}, {}) radius {} after {} attempts",
                rooms.len(),
                center.x,
                center.y,
                radius,
                attempts
            );
            rooms.push(room);
        }

        if rooms.len() < config.room_target {
            warn!(
                "Placed only {} of {} rooms after {} attempts",
                rooms.len(),
                config.room_target,
                attempts
            );
        }
        (rooms, attempts)
    }

    /// Joins every room to its nearest neighbor it is not already linked to.
    /// Ties go to the later room index. Returns the links in carving order.
    fn link_nearest<R: Rng>(
        &self,
        grid: &mut Grid,
        rooms: &[Circle],
        rng: &mut R,
    ) -> Vec<(usize, usize)> {
        let mut links: Vec<(usize, usize)> = Vec::new();

        for i in 0..rooms.len() {
            let nearest = (0..rooms.len())
                .filter(|&j| j != i && !links.contains(&(i, j)) && !links.contains(&(j, i)))
                .fold(None, |best: Option<(usize, f64)>, j| {
                    let dist = rooms[i].center.distance_l2(&rooms[j].center);
                    match best {
                        Some((_, best_dist)) if best_dist < dist => best,
                        _ => Some((j, dist)),
                    }
                });

            if let Some((j, _)) = nearest {
                carve_tunnel_between(grid, &rooms[i], &rooms[j], &self.config, rng);
                links.push((i, j));
            }
        }
        links
    }

    /// Groups rooms into connected components over `links` and carves one
    /// tunnel between a random member of each consecutive pair of components.
    /// Returns the number of extra tunnels carved.
    fn merge_components<R: Rng>(
        &self,
        grid: &mut Grid,
        rooms: &[Circle],
        links: &[(usize, usize)],
        rng: &mut R,
    ) -> usize {
        let components = connected_components(rooms.len(), links);
        if components.len() > 1 {
            debug!("Merging {} room components", components.len());
        }

        for pair in components.windows(2) {
            let first = pair[0][rng.random_range(0..pair[0].len())];
            let second = pair[1][rng.random_range(0..pair[1].len())];
            carve_tunnel_between(grid, &rooms[first], &rooms[second], &self.config, rng);
        }
        components.len().saturating_sub(1)
    }

    fn finish<R: Rng>(&self, grid: &mut Grid, rng: &mut R) {
        let config = &self.config;
        let eroded = wall_acid(grid, config.acid_base_probability, config.acid_iterations, rng);
        let nubs = smooth_diagonals(grid, config.smooth_min_diagonals);
        let holes = fill_cubby_holes(grid, config.fill_min_diagonals);
        debug!(
            "Finishing: acid opened {} cells, removed {} wall nubs, filled {} cubby holes",
            eroded, nubs, holes
        );
    }
}

/// Partitions room indices `0..count` into components joined by `links`.
/// Components are ordered by their lowest room index, members ascending.
pub fn connected_components(count: usize, links: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut sets: QuickUnionUf<UnionBySize> = QuickUnionUf::new(count);
    for &(a, b) in links {
        sets.union(a, b);
    }

    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    for room in 0..count {
        let root = sets.find(room);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[slot].push(room);
    }
    components
}

/// Carves a tunnel from `from` to `to` along a curve whose control point is
/// pushed diagonally outside the bounding box of the two centers by a random
/// bend, toward the lower-left or upper-right on a coin flip.
pub fn carve_tunnel_between<R: Rng>(
    grid: &mut Grid,
    from: &Circle,
    to: &Circle,
    config: &GeneratorConfig,
    rng: &mut R,
) {
    let (a, c) = (from.center, to.center);
    let control = if rng.random_bool(0.5) {
        Vector2::new(
            a.x.min(c.x) - rng.random_range(config.min_bend..=config.max_bend) as f64,
            a.y.max(c.y) + rng.random_range(config.min_bend..=config.max_bend) as f64,
        )
    } else {
        Vector2::new(
            a.x.max(c.x) + rng.random_range(config.min_bend..=config.max_bend) as f64,
            a.y.min(c.y) - rng.random_range(config.min_bend..=config.max_bend) as f64,
        )
    };
    trace!(
        "Tunnel ({}, {}) -> ({}, {}) via ({}, {})",
        a.x,
        a.y,
        c.x,
        c.y,
        control.x,
        control.y
    );

    match config.tunnel_style {
        TunnelStyle::Bezier => carve_bezier(grid, a, control, c, false),
        TunnelStyle::Cavern {
            base_probability,
            iterations,
        } => carve_cavern_bezier(grid, a, control, c, base_probability, iterations, rng),
    }
}

/// Generates a map with the default tunables, discarding the stats.
pub fn goblin_halls<R: Rng>(grid: &mut Grid, rng: &mut R) {
    GoblinHalls::default().generate(grid, rng);
}
