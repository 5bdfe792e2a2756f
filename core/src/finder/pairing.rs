//! Diagonal-pairing square search
//!
//! Every unordered point pair is treated as a potential diagonal and grouped
//! by its [`DiagonalKey`]. Two disjoint pairs in the same group are the
//! diagonals of a quadrilateral with a common midpoint and equal diagonals;
//! those candidates go through [`confirm_square`] and are de-duplicated by
//! their [`SquareKey`].
//!
//! Cost is O(n²) to enumerate and group pairs, plus one O(1) confirmation per
//! pair combination inside a group. A group of m pairs costs O(m²), so inputs
//! with many points symmetric about one center degrade to O(n⁴).

use super::config::FinderConfig;
use crate::geometry::{confirm_square, DiagonalKey};
use crate::model::{Point, Square, SquareKey};
use rustc_hash::{FxHashMap, FxHashSet};

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Points in the input snapshot
    pub points: usize,

    /// Unordered point pairs keyed
    pub pairs_examined: usize,

    /// Diagonal keys shared by at least two pairs
    pub diagonal_groups: usize,

    /// Pair combinations sent to confirmation
    pub candidates: usize,

    /// Pair combinations skipped because they share a corner
    pub shared_corner: usize,

    /// Candidates that failed confirmation
    pub rejected: usize,

    /// Confirmed squares already found under another key or ordering
    pub duplicates: usize,

    /// Diagonal groups above `FinderConfig::large_group_warning`
    pub large_groups: usize,
}

/// Outcome of a square search
#[derive(Debug, Clone)]
pub struct SquareSearch {
    /// Distinct squares, sorted by their member ids
    pub squares: Vec<Square>,

    pub stats: SearchStats,
}

/// Square finder
///
/// Stateless apart from its configuration; each call works on the snapshot it
/// is given and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct SquareFinder {
    config: FinderConfig,
}

impl SquareFinder {
    /// Create a new finder
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Run the search and keep its counters
    ///
    /// Input points must be distinct by coordinate; the point store
    /// guarantees this and the finder does not re-check it.
    pub fn search(&self, points: &[Point]) -> SquareSearch {
        let mut stats = SearchStats {
            points: points.len(),
            ..SearchStats::default()
        };

        if points.len() < 4 {
            return SquareSearch {
                squares: Vec::new(),
                stats,
            };
        }

        let groups = group_diagonals(points, &mut stats);

        let mut seen: FxHashSet<SquareKey> = FxHashSet::default();
        let mut squares = Vec::new();

        for (key, pairs) in groups.iter().filter(|(_, pairs)| pairs.len() >= 2) {
            stats.diagonal_groups += 1;

            if pairs.len() > self.config.large_group_warning {
                stats.large_groups += 1;
                tracing::warn!(
                    pairs = pairs.len(),
                    sum_x = key.sum_x,
                    sum_y = key.sum_y,
                    "large diagonal group, candidate checks grow with its square"
                );
            }

            for (i, &(a, b)) in pairs.iter().enumerate() {
                for &(c, d) in &pairs[i + 1..] {
                    let corners = [points[a], points[b], points[c], points[d]];

                    if !distinct_ids(&corners) {
                        stats.shared_corner += 1;
                        continue;
                    }

                    stats.candidates += 1;
                    if let Err(reason) = confirm_square(&corners, self.config.tolerance) {
                        stats.rejected += 1;
                        tracing::trace!(%reason, "candidate rejected");
                        continue;
                    }

                    if !seen.insert(SquareKey::from_points(&corners)) {
                        stats.duplicates += 1;
                        continue;
                    }

                    squares.push(Square::from_confirmed(corners));
                }
            }
        }

        squares.sort_by_key(|s| s.points().map(|p| p.id));

        tracing::debug!(
            points = stats.points,
            pairs = stats.pairs_examined,
            groups = stats.diagonal_groups,
            candidates = stats.candidates,
            rejected = stats.rejected,
            squares = squares.len(),
            "square search finished"
        );

        SquareSearch { squares, stats }
    }

    /// Find every distinct square formed by `points`
    ///
    /// Each square lists its corners by ascending id; the squares themselves
    /// are ordered by their member ids.
    pub fn find_squares(&self, points: &[Point]) -> Vec<Square> {
        self.search(points).squares
    }

    /// Number of squares [`find_squares`](Self::find_squares) reports
    pub fn count_squares(&self, points: &[Point]) -> usize {
        self.find_squares(points).len()
    }
}

/// Group every unordered pair of point indices by diagonal key
fn group_diagonals(
    points: &[Point],
    stats: &mut SearchStats,
) -> FxHashMap<DiagonalKey, Vec<(usize, usize)>> {
    let mut groups: FxHashMap<DiagonalKey, Vec<(usize, usize)>> = FxHashMap::default();

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let key = DiagonalKey::of(&points[i], &points[j]);
            groups.entry(key).or_default().push((i, j));
            stats.pairs_examined += 1;
        }
    }

    groups
}

fn distinct_ids(corners: &[Point; 4]) -> bool {
    (0..4).all(|i| ((i + 1)..4).all(|j| corners[i].id != corners[j].id))
}

/// Find squares with the default configuration
pub fn find_squares(points: &[Point]) -> Vec<Square> {
    SquareFinder::default().find_squares(points)
}

/// Count squares with the default configuration
pub fn count_squares(points: &[Point]) -> usize {
    SquareFinder::default().count_squares(points)
}
