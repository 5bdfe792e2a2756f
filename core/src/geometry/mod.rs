//! Geometry module - closed-form checks on integer points
//!
//! No search logic here, just the pieces the finder is built from.

pub mod confirm;
pub mod diagonal;
pub mod vector;

pub use confirm::{angular_order, confirm_square, is_square, Rejection, DEFAULT_TOLERANCE};
pub use diagonal::DiagonalKey;
pub use vector::{Offset, Vec2};
