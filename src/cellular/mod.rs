// src/cellular/mod.rs
// Cellular-automaton passes that roughen and clean up carved terrain.
pub mod acid;
pub mod smooth;

pub use acid::wall_acid;
pub use smooth::{fill_cubby_holes, smooth, smooth_diagonals, SmoothMode};
