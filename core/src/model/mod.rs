//! Value types shared by the store and the finder
//!
//! - **point**: point ids, integer coordinates and stored points
//! - **square**: validated four-corner squares and their canonical key

mod point;
mod square;

pub use point::{Coord, Point, PointId};
pub use square::{Square, SquareError, SquareKey};
