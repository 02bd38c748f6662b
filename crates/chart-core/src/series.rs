// File: crates/chart-core/src/series.rs
// Summary: Series model: labeled points, zero level, display flags and cached segments.

use tracing::debug;

use crate::error::Result;
use crate::segment::{self, Segment};
use crate::theme::ColorPair;
use crate::types::Point;

/// A labeled line/area series. Segments are kept in sync with the points and
/// zero level by every mutating method.
#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub show_line: bool,
    pub show_area: bool,
    pub colors: ColorPair,
    pub line_width: f32,
    points: Vec<Point>,
    zero_level: f64,
    segments: Vec<Segment>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            show_line: true,
            show_area: false,
            colors: ColorPair::default(),
            line_width: 2.0,
            points: Vec::new(),
            zero_level: 0.0,
            segments: Vec::new(),
        }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        let mut s = Self::new(label);
        s.set_points(data.into_iter().map(Point::from).collect());
        s
    }

    /// Series over `y` values with x = 0, 1, 2, ...
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        let data = values.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect();
        Self::with_data(label, data)
    }

    pub fn with_zero_level(mut self, zero_level: f64) -> Self {
        self.set_zero_level(zero_level);
        self
    }

    pub fn with_colors(mut self, colors: ColorPair) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_area(mut self, show_area: bool) -> Self {
        self.show_area = show_area;
        self
    }

    pub fn with_line(mut self, show_line: bool) -> Self {
        self.show_line = show_line;
        self
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn segments(&self) -> &[Segment] { &self.segments }
    pub fn zero_level(&self) -> f64 { self.zero_level }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn x_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// Replace all points and rebuild the segments.
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
        self.resegment();
    }

    /// Change the zero level and rebuild the segments.
    pub fn set_zero_level(&mut self, zero_level: f64) {
        self.zero_level = zero_level;
        self.resegment();
    }

    /// Append one point, extending the segments in place.
    /// Returns true when the append opened a new segment.
    pub fn append_point(&mut self, point: Point) -> Result<bool> {
        let point = Point::try_new(point.x, point.y)?;
        self.points.push(point);
        // A lone point loaded through set_points has no segment to extend.
        if self.segments.is_empty() && self.points.len() > 1 {
            self.resegment();
            return Ok(!self.segments.is_empty());
        }
        Ok(segment::append_point(&mut self.segments, point, self.zero_level))
    }

    fn resegment(&mut self) {
        self.segments = segment::segment(&self.points, self.zero_level);
        debug!(
            series = %self.label,
            points = self.points.len(),
            segments = self.segments.len(),
            zero_level = self.zero_level,
            "segments recomputed"
        );
    }
}
