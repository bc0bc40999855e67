// src/utils/geometry.rs

use crate::error::{CaveError, Result};

/// A 2D point/vector. Used both as a lattice coordinate and as a continuous
/// curve control point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Broadcasts a scalar to `(s, s)`.
    pub fn splat(s: f64) -> Self {
        Self { x: s, y: s }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }

    /// Componentwise product.
    pub fn scale_by(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }

    /// Componentwise quotient. Division by a zero component yields an
    /// infinite or NaN component, as with plain `f64` division.
    pub fn divide(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x / other.x, self.y / other.y)
    }

    /// Manhattan (L1) distance.
    pub fn distance_l1(&self, other: &Vector2) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Euclidean (L2) distance.
    pub fn distance_l2(&self, other: &Vector2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns `t * self + (1 - t) * other`.
    ///
    /// Note the direction: `t = 0` yields `other` and `t = 1` yields `self`.
    pub fn lerp(self, other: Vector2, t: f64) -> Vector2 {
        self.scale(t).add(other.scale(1.0 - t))
    }

    /// The lattice cell containing this point.
    pub fn floor_cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

impl From<f64> for Vector2 {
    fn from(s: f64) -> Self {
        Vector2::splat(s)
    }
}

impl From<(i32, i32)> for Vector2 {
    fn from((x, y): (i32, i32)) -> Self {
        Vector2::new(x as f64, y as f64)
    }
}

/// A circular room: a center and a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vector2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vector2, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(CaveError::DegenerateGeometry(format!(
                "circle radius must be positive, got {}",
                radius
            )));
        }
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(CaveError::DegenerateGeometry(format!(
                "circle center must be finite, got ({}, {})",
                center.x, center.y
            )));
        }
        Ok(Self { center, radius })
    }

    pub fn contains(&self, point: &Vector2) -> bool {
        self.center.distance_l2(point) <= self.radius
    }
}

/// Returns `true` if `circle` lies closer than `min_separation` to any circle
/// in `others`, measured edge to edge. Touching exactly at the threshold does
/// not count as close.
pub fn circle_close(circle: &Circle, others: &[Circle], min_separation: f64) -> bool {
    others.iter().any(|other| {
        other.center.distance_l2(&circle.center) < other.radius + circle.radius + min_separation
    })
}
