//! Point set loader
//!
//! Reads point set documents of the form
//! `{"points": [{"x": 0, "y": 0}, {"x": 1, "y": 0}]}`.

use crate::model::Coord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A list of coordinates to import, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSet {
    pub points: Vec<Coord>,
}

impl PointSet {
    pub fn new(points: Vec<Coord>) -> Self {
        Self { points }
    }

    /// Coordinates in document order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Loader result
pub type LoadResult<T> = Result<T, LoadError>;

/// Point set loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a point set document
pub fn parse_point_set(contents: &str) -> LoadResult<PointSet> {
    Ok(serde_json::from_str(contents)?)
}

/// Load a point set document from a file
pub fn load_point_set<P: AsRef<Path>>(path: P) -> LoadResult<PointSet> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let set = parse_point_set(&contents)?;
    tracing::debug!(path = %path.display(), points = set.len(), "point set loaded");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_set() {
        let set = parse_point_set(r#"{"points": [{"x": 0, "y": 0}, {"x": -1, "y": 5}]}"#).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.coords().collect::<Vec<_>>(), vec![Coord::new(0, 0), Coord::new(-1, 5)]);
    }

    #[test]
    fn test_parse_ignores_ids() {
        let set = parse_point_set(r#"{"points": [{"id": 4, "x": 2, "y": 3}]}"#).unwrap();
        assert_eq!(set.points, vec![Coord::new(2, 3)]);
    }

    #[test]
    fn test_parse_empty_set() {
        let set = parse_point_set(r#"{"points": []}"#).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_points() {
        let err = parse_point_set(r#"{"coords": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_non_integer_coordinates() {
        assert!(parse_point_set(r#"{"points": [{"x": 0.5, "y": 0}]}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_point_set("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
