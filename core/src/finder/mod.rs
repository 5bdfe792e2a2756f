//! Square finder
//!
//! - **config**: tolerance and logging thresholds
//! - **pairing**: the diagonal-pairing search with confirmation and dedup

mod config;
mod pairing;

pub use config::{ConfigError, FinderConfig};
pub use pairing::{count_squares, find_squares, SearchStats, SquareFinder, SquareSearch};
