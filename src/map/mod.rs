// src/map/mod.rs
pub mod grid;
pub mod regions;

pub use grid::{Grid, OPEN, WALL};
pub use regions::{all_connected, flood_fill};
