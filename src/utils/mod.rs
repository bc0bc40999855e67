// src/utils/mod.rs
pub mod geometry;

pub use geometry::{circle_close, Circle, Vector2};
