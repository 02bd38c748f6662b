// File: crates/chart-core/src/touch.rs
// Summary: Touch X to per-series index resolution and highlight geometry.

use crate::geometry::{PixelPoint, RectI32};
use crate::scale::{ChartScales, ScaleTransform};
use crate::series::Series;

/// Indices of the closest samples on either side of a data X value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    /// Greatest x that is `<=` the target.
    pub left: Option<usize>,
    /// Smallest x that is `>=` the target.
    pub right: Option<usize>,
}

/// Single scan over `xs`. Only strict improvements replace a candidate, so
/// ties resolve to the first index seen.
pub fn neighbors<I>(xs: I, x: f64) -> Neighbors
where
    I: IntoIterator<Item = f64>,
{
    let mut out = Neighbors::default();
    let mut best_left = f64::NEG_INFINITY;
    let mut best_right = f64::INFINITY;
    for (i, v) in xs.into_iter().enumerate() {
        if v <= x && (out.left.is_none() || v > best_left) {
            out.left = Some(i);
            best_left = v;
        }
        if v >= x && (out.right.is_none() || v < best_right) {
            out.right = Some(i);
            best_right = v;
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub enum TouchResolution {
    /// The touch X is outside the plot's horizontal extent.
    OutsidePlot,
    /// The touch is inside the plot; `hits[i]` is the reported index for
    /// series `i`, `None` when that series has no sample at or left of `x`.
    Inside { x: f64, px: f64, hits: Vec<Option<usize>> },
}

impl TouchResolution {
    pub fn is_inside(&self) -> bool {
        matches!(self, TouchResolution::Inside { .. })
    }
}

/// Map a pixel X to data space and look up every series' left neighbor.
pub fn resolve(series: &[Series], scales: &ChartScales, plot: &RectI32, px: f64) -> TouchResolution {
    if !plot.contains_x(px) {
        return TouchResolution::OutsidePlot;
    }
    let x = scales.x.from_px(px);
    let hits = series.iter().map(|s| neighbors(s.x_values(), x).left).collect();
    TouchResolution::Inside { x, px, hits }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightMarker {
    pub series: usize,
    pub index: usize,
    pub at: PixelPoint,
}

/// Vertical line at the touch position plus a marker on each hit sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub line: (PixelPoint, PixelPoint),
    pub markers: Vec<HighlightMarker>,
}

pub fn highlight(
    series: &[Series],
    scales: &ChartScales,
    plot: &RectI32,
    resolution: &TouchResolution,
) -> Option<Highlight> {
    let TouchResolution::Inside { px, hits, .. } = resolution else {
        return None;
    };
    let line = (
        PixelPoint::new(*px, plot.top as f64),
        PixelPoint::new(*px, plot.bottom as f64),
    );
    let markers = hits
        .iter()
        .enumerate()
        .filter_map(|(si, hit)| {
            let index = (*hit)?;
            let p = *series.get(si)?.points().get(index)?;
            Some(HighlightMarker { series: si, index, at: scales.to_screen(p) })
        })
        .collect();
    Some(Highlight { line, markers })
}
