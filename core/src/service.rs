//! Square service
//!
//! Wires a point repository to a square finder. This is the surface the
//! front ends drive: bulk import, single point edits, and square queries over
//! a fresh snapshot each time.

use crate::finder::{FinderConfig, SquareFinder, SquareSearch};
use crate::model::{Coord, Point, PointId, Square};
use crate::store::{PointRepository, PointStore};

/// Points plus square detection over them
#[derive(Debug, Clone)]
pub struct SquareService<R: PointRepository = PointStore> {
    repo: R,
    finder: SquareFinder,
}

impl Default for SquareService<PointStore> {
    fn default() -> Self {
        Self::new(PointStore::new(), FinderConfig::default())
    }
}

impl<R: PointRepository> SquareService<R> {
    /// Create a service over an existing repository
    pub fn new(repo: R, config: FinderConfig) -> Self {
        Self {
            repo,
            finder: SquareFinder::new(config),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Replace every stored point with `coords`
    ///
    /// Clears the repository, then adds each coordinate in the given order.
    /// Duplicates in the input collapse onto the first occurrence.
    pub fn import_points<I, C>(&self, coords: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        self.repo.clear();

        let mut given = 0usize;
        for coord in coords {
            let coord = coord.into();
            self.repo.add(coord.x, coord.y);
            given += 1;
        }

        tracing::debug!(given, stored = self.repo.all().len(), "points imported");
    }

    pub fn add_point(&self, x: i32, y: i32) -> Point {
        self.repo.add(x, y)
    }

    pub fn delete_point(&self, id: PointId) -> bool {
        self.repo.remove(id)
    }

    /// All points, ascending by id
    pub fn points(&self) -> Vec<Point> {
        self.repo.all()
    }

    /// Squares in the current snapshot
    pub fn squares(&self) -> Vec<Square> {
        self.finder.find_squares(&self.repo.all())
    }

    pub fn count_squares(&self) -> usize {
        self.finder.count_squares(&self.repo.all())
    }

    /// Squares plus search counters for the current snapshot
    pub fn search(&self) -> SquareSearch {
        self.finder.search(&self.repo.all())
    }
}
