// src/carve/mod.rs
pub mod bezier;
pub mod circle;

pub use bezier::{carve_bezier, carve_cavern_bezier, quadratic_point};
pub use circle::carve_circle;
