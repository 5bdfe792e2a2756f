//! Squares made of four stored points

use super::point::{Coord, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors raised when building a [`Square`] from an explicit point list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("A square needs points, none were given")]
    NoPoints,

    #[error("A square must have exactly 4 points, got {0}")]
    WrongPointCount(usize),

    #[error("A square must have 4 distinct points, ({x}, {y}) appears more than once")]
    DuplicatePoint { x: i32, y: i32 },
}

/// Canonical square key: the four corner coordinates sorted ascending
///
/// Two discoveries of the same square produce the same key no matter which
/// diagonal pair found them or which ids the corners carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareKey(pub [Coord; 4]);

impl SquareKey {
    pub fn from_points(points: &[Point; 4]) -> Self {
        let mut coords = points.map(|p| p.coord());
        coords.sort_unstable();
        Self(coords)
    }
}

impl fmt::Display for SquareKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}|{}|{}|{}", a, b, c, d)
    }
}

/// Four distinct points forming a square
///
/// Points are kept in ascending id order for presentation stability. Equality
/// and hashing go through the [`SquareKey`], so they only look at coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    points: [Point; 4],
}

#[derive(Deserialize)]
struct RawSquare {
    points: Vec<Point>,
}

impl TryFrom<RawSquare> for Square {
    type Error = SquareError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.points)
    }
}

impl Square {
    /// Build a square from an explicit point list
    ///
    /// Only the shape of the input is validated (count and distinctness), the
    /// geometry is not: use [`Square::is_valid_square`] for that.
    pub fn new<I>(points: I) -> Result<Self, SquareError>
    where
        I: IntoIterator<Item = Point>,
    {
        let list: Vec<Point> = points.into_iter().collect();

        if list.is_empty() {
            return Err(SquareError::NoPoints);
        }

        let mut points: [Point; 4] = list
            .as_slice()
            .try_into()
            .map_err(|_| SquareError::WrongPointCount(list.len()))?;

        for i in 0..4 {
            for j in (i + 1)..4 {
                if points[i].same_position(&points[j]) {
                    return Err(SquareError::DuplicatePoint {
                        x: points[i].x,
                        y: points[i].y,
                    });
                }
            }
        }

        points.sort_by_key(|p| p.id);
        Ok(Self { points })
    }

    /// Corners in ascending id order
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    pub fn key(&self) -> SquareKey {
        SquareKey::from_points(&self.points)
    }

    /// Whether a corner sits at `coord`
    pub fn contains(&self, coord: Coord) -> bool {
        self.points.iter().any(|p| p.coord() == coord)
    }

    /// Wrap four corners that already passed geometric confirmation
    ///
    /// Confirmation rejects coincident corners (they tie in angular order), so
    /// the shape checks of [`Square::new`] cannot fail here.
    pub(crate) fn from_confirmed(mut points: [Point; 4]) -> Self {
        points.sort_by_key(|p| p.id);
        Self { points }
    }

    /// Six-distance square test
    ///
    /// Four distinct points form a square exactly when their six pairwise
    /// distances take two values: four equal sides and two equal, longer
    /// diagonals. Independent of the diagonal-pairing search, so it doubles as
    /// a brute-force reference.
    pub fn is_valid_square(points: &[Point; 4]) -> bool {
        for i in 0..4 {
            for j in (i + 1)..4 {
                if points[i].same_position(&points[j]) {
                    return false;
                }
            }
        }

        let mut distances = Vec::with_capacity(6);
        for i in 0..4 {
            for j in (i + 1)..4 {
                distances.push(points[i].distance_squared(&points[j]));
            }
        }
        distances.sort_unstable();

        let side = distances[0];
        let diagonal = distances[5];
        distances[..4].iter().all(|&d| d == side)
            && distances[4] == diagonal
            && diagonal == 2 * side
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Square {}

impl Hash for Square {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let corners: Vec<String> = self
            .points
            .iter()
            .map(|p| format!("({}, {})", p.x, p.y))
            .collect();
        write!(f, "Square: [{}]", corners.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PointId;

    fn pt(id: u64, x: i32, y: i32) -> Point {
        Point::new(PointId(id), x, y)
    }

    #[test]
    fn test_new_with_valid_square() {
        let square = Square::new([pt(1, -1, 1), pt(2, 1, 1), pt(3, 1, -1), pt(4, -1, -1)])
            .expect("valid input");

        assert_eq!(square.points().len(), 4);
        assert!(square.contains(Coord::new(-1, 1)));
        assert!(square.contains(Coord::new(1, -1)));
    }

    #[test]
    fn test_new_orders_points_by_id() {
        let square = Square::new([pt(9, 0, 0), pt(2, 1, 0), pt(5, 1, 1), pt(1, 0, 1)]).unwrap();
        let ids: Vec<u64> = square.points().iter().map(|p| p.id.0).collect();

        assert_eq!(ids, vec![1, 2, 5, 9]);
    }

    #[test]
    fn test_new_rejects_empty_input() {
        assert_eq!(Square::new(Vec::new()), Err(SquareError::NoPoints));
    }

    #[test]
    fn test_new_rejects_wrong_count() {
        let err = Square::new([pt(1, 0, 0), pt(2, 1, 0), pt(3, 1, 1)]).unwrap_err();
        assert_eq!(err, SquareError::WrongPointCount(3));

        let err = Square::new([
            pt(1, 0, 0),
            pt(2, 1, 0),
            pt(3, 1, 1),
            pt(4, 0, 1),
            pt(5, 2, 2),
        ])
        .unwrap_err();
        assert_eq!(err, SquareError::WrongPointCount(5));
    }

    #[test]
    fn test_new_rejects_duplicate_coordinates() {
        let err = Square::new([pt(1, 0, 0), pt(2, 1, 0), pt(3, 0, 0), pt(4, 0, 1)]).unwrap_err();

        assert_eq!(err, SquareError::DuplicatePoint { x: 0, y: 0 });
    }

    #[test]
    fn test_equality_uses_coordinates_only() {
        let a = Square::new([pt(1, 0, 0), pt(2, 1, 0), pt(3, 1, 1), pt(4, 0, 1)]).unwrap();
        let b = Square::new([pt(14, 0, 1), pt(11, 1, 1), pt(12, 0, 0), pt(13, 1, 0)]).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_key_is_sorted() {
        let key = SquareKey::from_points(&[pt(1, 1, 1), pt(2, 0, 1), pt(3, 1, 0), pt(4, 0, 0)]);

        assert_eq!(
            key.0,
            [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
        assert_eq!(key.to_string(), "(0, 0)|(0, 1)|(1, 0)|(1, 1)");
    }

    #[test]
    fn test_is_valid_square() {
        assert!(Square::is_valid_square(&[pt(1, 0, 0), pt(2, 1, 0), pt(3, 1, 1), pt(4, 0, 1)]));
        assert!(Square::is_valid_square(&[pt(1, -1, 1), pt(2, 1, 1), pt(3, 1, -1), pt(4, -1, -1)]));
        assert!(Square::is_valid_square(&[pt(1, 1, 0), pt(2, 2, 1), pt(3, 1, 2), pt(4, 0, 1)]));

        // rectangle
        assert!(!Square::is_valid_square(&[pt(1, 0, 0), pt(2, 2, 0), pt(3, 2, 1), pt(4, 0, 1)]));
        // rhombus
        assert!(!Square::is_valid_square(&[pt(1, 0, 0), pt(2, 2, 1), pt(3, 4, 0), pt(4, 2, -1)]));
        // coincident corners
        assert!(!Square::is_valid_square(&[pt(1, 0, 0), pt(2, 0, 0), pt(3, 1, 1), pt(4, 0, 1)]));
    }

    #[test]
    fn test_from_confirmed_orders_by_id() {
        let square = Square::from_confirmed([pt(4, 0, 1), pt(3, 1, 1), pt(1, 0, 0), pt(2, 1, 0)]);
        let ids: Vec<u64> = square.points().iter().map(|p| p.id.0).collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(square, Square::new([pt(1, 0, 0), pt(2, 1, 0), pt(3, 1, 1), pt(4, 0, 1)]).unwrap());
    }

    #[test]
    fn test_display() {
        let square = Square::new([pt(1, 0, 0), pt(2, 1, 0), pt(3, 1, 1), pt(4, 0, 1)]).unwrap();
        assert_eq!(square.to_string(), "Square: [(0, 0), (1, 0), (1, 1), (0, 1)]");
    }

    #[test]
    fn test_json_round_trip_validates() {
        let square = Square::new([pt(1, 0, 0), pt(2, 1, 0), pt(3, 1, 1), pt(4, 0, 1)]).unwrap();
        let json = serde_json::to_string(&square).unwrap();
        assert!(json.starts_with("{\"points\":["));

        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(back, square);

        let bad = r#"{"points":[{"id":1,"x":0,"y":0},{"id":2,"x":0,"y":0}]}"#;
        assert!(serde_json::from_str::<Square>(bad).is_err());
    }
}
