// src/lib.rs
//! Procedural generation of organic, cave-like 2D tile maps.
//!
//! Rooms are carved as circles and joined with quadratic Bezier tunnels, then
//! roughened by stochastic wall erosion and tidied by smoothing passes.
//!
//! ```
//! use cavegen::generator::GoblinHalls;
//! use cavegen::map::Grid;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut grid = Grid::new(120, 80).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let stats = GoblinHalls::default().generate(&mut grid, &mut rng);
//! assert!(stats.connected);
//! print!("{}", grid);
//! ```

pub mod carve;
pub mod cellular;
pub mod error;
pub mod generator;
pub mod map;
pub mod utils;

pub use error::{CaveError, Result};
