//! Point storage
//!
//! [`PointRepository`] is the contract the service layer needs from a point
//! store; [`PointStore`] is the in-memory implementation.

mod points;

pub use points::PointStore;

use crate::model::{Point, PointId};

/// Storage operations over unique integer points
///
/// Implementations must keep coordinates unique, hand out increasing ids that
/// are never reused, and return snapshots ordered by ascending id.
pub trait PointRepository {
    /// All points, ascending by id
    fn all(&self) -> Vec<Point>;

    fn get(&self, id: PointId) -> Option<Point>;

    fn find_by_coordinates(&self, x: i32, y: i32) -> Option<Point>;

    /// Insert `(x, y)`, or return the point already stored there
    fn add(&self, x: i32, y: i32) -> Point;

    /// Remove a point, returning whether it existed
    fn remove(&self, id: PointId) -> bool;

    /// Remove all points without rewinding id assignment
    fn clear(&self);
}
