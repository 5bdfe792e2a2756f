//! Diagonal keys
//!
//! The two diagonals of a square share their midpoint and their length. A
//! point pair is keyed by twice its midpoint and its squared length, all in
//! exact integers, so pairs that could be the two diagonals of one square land
//! on the same key.

use crate::model::Point;

/// `(sum_x, sum_y, length_sq)` of a point pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagonalKey {
    /// Twice the midpoint x
    pub sum_x: i64,
    /// Twice the midpoint y
    pub sum_y: i64,
    /// Squared distance between the pair
    pub length_sq: u128,
}

impl DiagonalKey {
    /// Key of the segment `a`-`b`; symmetric in its arguments
    pub fn of(a: &Point, b: &Point) -> Self {
        Self {
            sum_x: i64::from(a.x) + i64::from(b.x),
            sum_y: i64::from(a.y) + i64::from(b.y),
            length_sq: a.distance_squared(b),
        }
    }
}
