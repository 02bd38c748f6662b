// File: crates/chart-core/src/error.rs
// Summary: Error type for the fallible parts of the chart API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("series index {index} out of range (have {len})")]
    SeriesIndex { index: usize, len: usize },

    #[error("point ({x}, {y}) is not finite")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("insets leave no plot area on a {width}x{height} surface")]
    PlotTooSmall { width: i32, height: i32 },

    #[error("invalid chart config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        ChartError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
