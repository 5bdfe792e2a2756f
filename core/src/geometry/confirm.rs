//! Geometric confirmation of square candidates
//!
//! A shared diagonal key is necessary for a square but not sufficient: the
//! diagonals of any rectangle share midpoint and length too. Candidates are
//! re-checked here with closed-form tests:
//!
//! 1. order the corners by angle around their centroid;
//! 2. the ordered polygon must be simple and convex;
//! 3. all sides equal within the tolerance;
//! 4. all interior angles right, via the dot product of consecutive edges.
//!
//! Ordering and convexity are decided on exact integers. Side lengths and
//! angles are compared in floating point against the tolerance.

use super::vector::Offset;
use crate::model::Point;
use thiserror::Error;

/// Default absolute tolerance for side lengths and right angles
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Why a candidate quadrilateral is not a square
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("two corners share an angle around the centroid")]
    AngularTie,

    #[error("polygon is not simple and convex")]
    NotConvex,

    #[error("side lengths differ")]
    UnequalSides,

    #[error("interior angle is not a right angle")]
    NotRightAngle,
}

/// Order four corners counter-clockwise by angle around their centroid
///
/// A corner sitting on the centroid, or two corners in the same direction from
/// it, leave the order undefined and fail with [`Rejection::AngularTie`].
pub fn angular_order(points: &[Point; 4]) -> Result<[Point; 4], Rejection> {
    let sum_x: i64 = points.iter().map(|p| i64::from(p.x)).sum();
    let sum_y: i64 = points.iter().map(|p| i64::from(p.y)).sum();

    // Offsets from the centroid, scaled by 4 to stay integral.
    let mut around: Vec<(Offset, Point)> = points
        .iter()
        .map(|p| {
            let rel = Offset::new(4 * i64::from(p.x) - sum_x, 4 * i64::from(p.y) - sum_y);
            (rel, *p)
        })
        .collect();

    if around.iter().any(|(rel, _)| rel.is_zero()) {
        return Err(Rejection::AngularTie);
    }

    around.sort_by(|(a, _), (b, _)| a.to_vec2().angle().total_cmp(&b.to_vec2().angle()));

    for i in 0..4 {
        let next = (i + 1) % 4;
        if around[i].0.same_direction(&around[next].0) {
            return Err(Rejection::AngularTie);
        }
    }

    Ok([around[0].1, around[1].1, around[2].1, around[3].1])
}

/// Check that four points form a square
pub fn confirm_square(points: &[Point; 4], tolerance: f64) -> Result<(), Rejection> {
    let ordered = angular_order(points)?;

    let edges: [Offset; 4] =
        std::array::from_fn(|i| Offset::between(&ordered[i], &ordered[(i + 1) % 4]));

    // Every turn must go the same way; a zero turn means collinear corners.
    let turns: [i128; 4] = std::array::from_fn(|i| edges[i].cross_z(&edges[(i + 1) % 4]));
    let convex = turns.iter().all(|&t| t > 0) || turns.iter().all(|&t| t < 0);
    if !convex {
        return Err(Rejection::NotConvex);
    }

    let sides = edges.map(|e| e.to_vec2().length());
    let first_side = sides[0];
    if sides.iter().any(|s| (s - first_side).abs() > tolerance) {
        return Err(Rejection::UnequalSides);
    }

    let limit = tolerance * first_side * first_side;
    for i in 0..4 {
        let incoming = edges[(i + 3) % 4].to_vec2();
        let outgoing = edges[i].to_vec2();
        if incoming.dot(&outgoing).abs() > limit {
            return Err(Rejection::NotRightAngle);
        }
    }

    Ok(())
}

/// Convenience wrapper around [`confirm_square`]
pub fn is_square(points: &[Point; 4], tolerance: f64) -> bool {
    confirm_square(points, tolerance).is_ok()
}
