//! Finder configuration

use crate::geometry::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration values the finder cannot work with
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be a finite, non-negative number, got {0}")]
    InvalidTolerance(f64),
}

/// Square finder configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Absolute tolerance for equal sides, scaled by side² for right angles
    pub tolerance: f64,

    /// Diagonal groups with more pairs than this are logged as a warning
    ///
    /// Candidate checks inside a group grow with the square of its size, so
    /// point sets with many points symmetric about one center approach
    /// O(n⁴). The search is never cut short; this only makes it visible.
    pub large_group_warning: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            large_group_warning: 256,
        }
    }
}

impl FinderConfig {
    /// Check values that would make every candidate fail confirmation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FinderConfig::default();
        assert_eq!(config.tolerance, 0.001);
        assert_eq!(config.large_group_warning, 256);
    }

    #[test]
    fn test_validate() {
        assert!(FinderConfig::default().validate().is_ok());

        for tolerance in [-1.0, f64::NAN, f64::INFINITY] {
            let config = FinderConfig {
                tolerance,
                ..FinderConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidTolerance(_))),
                "tolerance {} should be rejected",
                tolerance
            );
        }

        let exact = FinderConfig {
            tolerance: 0.0,
            ..FinderConfig::default()
        };
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: FinderConfig = serde_json::from_str(r#"{ "tolerance": 0.5 }"#).unwrap();

        assert_eq!(config.tolerance, 0.5);
        assert_eq!(config.large_group_warning, 256);
    }
}
