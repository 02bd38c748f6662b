// File: crates/chart-core/src/path.rs
// Summary: Pure segment-to-path conversion for line strokes and area fills.

use crate::geometry::PixelPoint;
use crate::scale::{ChartScales, ScaleTransform};
use crate::segment::Segment;

/// A pixel-space polyline, or a polygon when `closed`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathShape {
    pub points: Vec<PixelPoint>,
    pub closed: bool,
}

/// Stroke path through every point of the segment.
pub fn line_path(segment: &Segment, scales: &ChartScales) -> PathShape {
    let points = segment.points.iter().map(|&p| scales.to_screen(p)).collect();
    PathShape { points, closed: false }
}

/// Fill polygon between the segment and the horizontal line at `zero_px`.
pub fn area_path(segment: &Segment, scales: &ChartScales, zero_px: f64) -> PathShape {
    let (Some(first), Some(last)) = (segment.points.first(), segment.points.last()) else {
        return PathShape { points: Vec::new(), closed: true };
    };
    let mut points = Vec::with_capacity(segment.points.len() + 2);
    points.push(PixelPoint::new(scales.x.to_px(first.x), zero_px));
    points.extend(segment.points.iter().map(|&p| scales.to_screen(p)));
    points.push(PixelPoint::new(scales.x.to_px(last.x), zero_px));
    PathShape { points, closed: true }
}
