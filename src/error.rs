// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaveError {
    #[error("Invalid grid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimension { width: i32, height: i32 },

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Cell ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaveError>;
