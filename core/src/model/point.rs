//! Integer points and their identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype wrapper for point identifiers
///
/// Ids are assigned by a [`PointStore`](crate::store::PointStore), start at 1
/// and are never reused within the lifetime of a store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer 2D coordinates
///
/// This is the geometric identity of a point: two points with different ids
/// but the same `Coord` are the same place in the plane. Ordering is
/// lexicographic by `(x, y)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A stored point: an id plus integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(id: PointId, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }

    /// Geometric identity of this point
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// True when both points sit at the same coordinates, whatever their ids
    pub fn same_position(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Exact squared Euclidean distance
    ///
    /// Widened to `u128` so the full `i32` range cannot overflow.
    pub fn distance_squared(&self, other: &Point) -> u128 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs() as u128;
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs() as u128;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({}, {})", self.id, self.x, self.y)
    }
}
