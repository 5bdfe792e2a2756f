//! Squares Core
//!
//! Find every square whose four corners belong to a set of integer points.
//!
//! Points live in a [`PointStore`], which keeps them unique by coordinates and
//! hands out ids. A [`SquareFinder`] takes a snapshot of those points, groups
//! every pair by its diagonal key (twice the midpoint plus the squared
//! length), confirms each candidate geometrically and de-duplicates the
//! results by their sorted corner coordinates.
//!
//! ```rust
//! use squares_core::{PointStore, SquareFinder};
//!
//! let store = PointStore::new();
//! for (x, y) in [(0, 0), (1, 0), (1, 1), (0, 1)] {
//!     store.add(x, y);
//! }
//!
//! let squares = SquareFinder::default().find_squares(&store.all());
//! assert_eq!(squares.len(), 1);
//! ```

pub mod model;    // Points, coordinates, squares
pub mod geometry; // Diagonal keys and square confirmation
pub mod store;    // Thread-safe point storage
pub mod finder;   // Diagonal-pairing square search
pub mod service;  // Store + finder facade
pub mod loader;   // Point set documents

pub use model::{Coord, Point, PointId, Square, SquareError, SquareKey};
pub use geometry::{confirm_square, DiagonalKey, Rejection};
pub use store::{PointRepository, PointStore};
pub use finder::{count_squares, ConfigError, find_squares, FinderConfig, SearchStats, SquareFinder, SquareSearch};
pub use service::SquareService;
pub use loader::{load_point_set, parse_point_set, LoadError, LoadResult, PointSet};
