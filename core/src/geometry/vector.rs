//! Plane vectors for the confirmation checks
//!
//! `Offset` keeps integer differences exact; `Vec2` is the floating point
//! view used for lengths and the tolerance-bounded angle test.

use crate::model::Point;

/// Exact integer displacement between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub dx: i64,
    pub dy: i64,
}

impl Offset {
    pub fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    /// Vector from `from` to `to`
    pub fn between(from: &Point, to: &Point) -> Self {
        Self {
            dx: i64::from(to.x) - i64::from(from.x),
            dy: i64::from(to.y) - i64::from(from.y),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    pub fn dot(&self, other: &Offset) -> i128 {
        i128::from(self.dx) * i128::from(other.dx) + i128::from(self.dy) * i128::from(other.dy)
    }

    /// Cross product z-component
    pub fn cross_z(&self, other: &Offset) -> i128 {
        i128::from(self.dx) * i128::from(other.dy) - i128::from(self.dy) * i128::from(other.dx)
    }

    /// Both offsets point the same way from the origin
    pub fn same_direction(&self, other: &Offset) -> bool {
        self.cross_z(other) == 0 && self.dot(other) > 0
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.dx as f64, self.dy as f64)
    }
}

/// Floating point 2D vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: &Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Polar angle in radians, in `(-pi, pi]`
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}
