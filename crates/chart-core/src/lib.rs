// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the segmentation, scaling and layout API.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod extent;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod path;
pub mod scale;
pub mod segment;
pub mod series;
pub mod theme;
pub mod touch;
pub mod types;

pub use axis::{Axis, LabelFormatter};
pub use chart::Chart;
pub use config::{AxisConfig, ChartConfig, RenderOptions};
pub use error::{ChartError, Result};
pub use extent::{extent_of, Dimension, Extent};
pub use layout::{ChartLayout, PathRole, SeriesPath};
pub use scale::{scale_to_axis, scale_to_vertical_axis, zero_line_pixel, ChartScales, ScaleTransform};
pub use segment::{segment, Segment};
pub use series::Series;
pub use theme::{ColorPair, Theme};
pub use touch::{neighbors, Neighbors, TouchResolution};
pub use types::{Insets, Point, Rgba, Side};
