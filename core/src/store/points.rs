//! Thread-safe point store
//!
//! Points are interned by coordinates: adding a coordinate pair that is
//! already present hands back the existing point instead of a new id.

use super::PointRepository;
use crate::model::{Coord, Point, PointId};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe, id-indexed set of unique integer points
///
/// Cloning yields another handle onto the same store. Writers (`add`,
/// `remove`, `clear`) are serialized by one write lock; readers see a
/// consistent state under the read lock.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    inner: Arc<RwLock<PointStoreInner>>,
}

#[derive(Debug, Default)]
struct PointStoreInner {
    // Id -> point, ordered so snapshots come out by ascending id
    points: BTreeMap<PointId, Point>,

    // Coord -> id, the uniqueness index
    by_coord: FxHashMap<Coord, PointId>,

    // Last id handed out; never rewound
    last_id: u64,
}

impl PointStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation leaves both maps consistent before it can panic, so a
    // poisoned lock still guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, PointStoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PointStoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a point, returning the existing one if `(x, y)` is already stored
    ///
    /// The lookup and the insert happen under a single write lock, so racing
    /// adds of the same coordinates create exactly one point.
    pub fn add(&self, x: i32, y: i32) -> Point {
        let coord = Coord::new(x, y);
        let mut inner = self.write();

        if let Some(id) = inner.by_coord.get(&coord) {
            if let Some(existing) = inner.points.get(id) {
                return *existing;
            }
        }

        inner.last_id += 1;
        let point = Point::new(PointId(inner.last_id), x, y);
        inner.by_coord.insert(coord, point.id);
        inner.points.insert(point.id, point);
        tracing::trace!(id = %point.id, x, y, "point added");
        point
    }

    /// Get a point by id
    pub fn get(&self, id: PointId) -> Option<Point> {
        self.read().points.get(&id).copied()
    }

    /// Get the point stored at `(x, y)`
    pub fn find_by_coordinates(&self, x: i32, y: i32) -> Option<Point> {
        let inner = self.read();
        inner
            .by_coord
            .get(&Coord::new(x, y))
            .and_then(|id| inner.points.get(id))
            .copied()
    }

    /// Check if a point is stored at `(x, y)`
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.read().by_coord.contains_key(&Coord::new(x, y))
    }

    /// Remove a point by id, returning whether it existed
    pub fn remove(&self, id: PointId) -> bool {
        let mut inner = self.write();
        match inner.points.remove(&id) {
            Some(point) => {
                inner.by_coord.remove(&point.coord());
                tracing::trace!(id = %id, "point removed");
                true
            }
            None => false,
        }
    }

    /// Remove every point; ids keep counting up from where they were
    pub fn clear(&self) {
        let mut inner = self.write();
        inner.points.clear();
        inner.by_coord.clear();
    }

    /// Snapshot of all points in ascending id order
    pub fn all(&self) -> Vec<Point> {
        self.read().points.values().copied().collect()
    }

    /// Number of stored points
    pub fn len(&self) -> usize {
        self.read().points.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.read().points.is_empty()
    }
}

impl PointRepository for PointStore {
    fn all(&self) -> Vec<Point> {
        PointStore::all(self)
    }

    fn get(&self, id: PointId) -> Option<Point> {
        PointStore::get(self, id)
    }

    fn find_by_coordinates(&self, x: i32, y: i32) -> Option<Point> {
        PointStore::find_by_coordinates(self, x, y)
    }

    fn add(&self, x: i32, y: i32) -> Point {
        PointStore::add(self, x, y)
    }

    fn remove(&self, id: PointId) -> bool {
        PointStore::remove(self, id)
    }

    fn clear(&self) {
        PointStore::clear(self)
    }
}
