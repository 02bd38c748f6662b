// File: crates/chart-core/src/scale.rs
// Summary: Horizontal (X) and vertical (Y) linear scales between data extents and pixels.

use crate::extent::Extent;
use crate::geometry::{PixelPoint, RectI32};
use crate::types::Point;

/// Pixels per data unit. Zero when the extent is undefined or has no span,
/// which collapses every value onto the axis start.
#[inline]
pub fn factor(extent: Option<Extent>, length: f64) -> f64 {
    match extent {
        Some(e) if !e.is_degenerate() => length / e.span(),
        _ => 0.0,
    }
}

#[inline]
fn origin(extent: Option<Extent>) -> f64 {
    extent.map_or(0.0, |e| e.min)
}

/// `pixel = factor * (value - min)` for each value.
pub fn scale_to_axis(values: &[f64], extent: Option<Extent>, drawing_length: f64) -> Vec<f64> {
    let f = factor(extent, drawing_length);
    let min = origin(extent);
    values.iter().map(|v| f * (v - min)).collect()
}

/// Vertical variant: pixel space grows downward, so the mapping is flipped and
/// shifted by `top_inset`.
pub fn scale_to_vertical_axis(
    values: &[f64],
    extent: Option<Extent>,
    drawing_height: f64,
    top_inset: f64,
) -> Vec<f64> {
    let f = factor(extent, drawing_height);
    let min = origin(extent);
    values.iter().map(|v| top_inset + drawing_height - f * (v - min)).collect()
}

/// Pixel row of `zero_level`, pinned to the minimum's row when the zero level
/// lies below the visible range.
pub fn zero_line_pixel(extent: Option<Extent>, zero_level: f64, drawing_height: f64, top_inset: f64) -> f64 {
    VerticalScale::new(extent, top_inset, drawing_height).zero_line_px(zero_level)
}

/// General scale transform operations for a single axis.
pub trait ScaleTransform {
    fn factor(&self) -> f64;
    fn to_px(&self, v: f64) -> f64;
    fn from_px(&self, px: f64) -> f64;

    fn to_px_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&v| self.to_px(v)).collect()
    }
}

/// Horizontal scale: data X mapped onto `[left_px, left_px + width_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalScale {
    pub extent: Option<Extent>,
    pub left_px: f64,
    pub width_px: f64,
}

impl HorizontalScale {
    pub fn new(extent: Option<Extent>, left_px: f64, width_px: f64) -> Self {
        Self { extent, left_px, width_px }
    }
}

impl ScaleTransform for HorizontalScale {
    #[inline]
    fn factor(&self) -> f64 {
        factor(self.extent, self.width_px)
    }
    #[inline]
    fn to_px(&self, x: f64) -> f64 {
        self.left_px + self.factor() * (x - origin(self.extent))
    }
    /// Inverse of `to_px`; a zero factor maps every pixel to the extent minimum.
    #[inline]
    fn from_px(&self, px: f64) -> f64 {
        let f = self.factor();
        let min = origin(self.extent);
        if f == 0.0 { min } else { min + (px - self.left_px) / f }
    }
}

/// Vertical scale: data Y mapped onto `[top_px + height_px, top_px]` (upward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalScale {
    pub extent: Option<Extent>,
    pub top_px: f64,
    pub height_px: f64,
}

impl VerticalScale {
    pub fn new(extent: Option<Extent>, top_px: f64, height_px: f64) -> Self {
        Self { extent, top_px, height_px }
    }

    pub fn bottom_px(&self) -> f64 {
        self.top_px + self.height_px
    }

    pub fn zero_line_px(&self, zero_level: f64) -> f64 {
        match self.extent {
            Some(e) if zero_level < e.min => self.to_px(e.min),
            _ => self.to_px(zero_level),
        }
    }
}

impl ScaleTransform for VerticalScale {
    #[inline]
    fn factor(&self) -> f64 {
        factor(self.extent, self.height_px)
    }
    #[inline]
    fn to_px(&self, y: f64) -> f64 {
        self.bottom_px() - self.factor() * (y - origin(self.extent))
    }
    #[inline]
    fn from_px(&self, py: f64) -> f64 {
        let f = self.factor();
        let min = origin(self.extent);
        if f == 0.0 { min } else { min + (self.bottom_px() - py) / f }
    }
}

/// Both axes for one plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub x: HorizontalScale,
    pub y: VerticalScale,
}

impl ChartScales {
    pub fn new(x_extent: Option<Extent>, y_extent: Option<Extent>, plot: &RectI32) -> Self {
        Self {
            x: HorizontalScale::new(x_extent, plot.left as f64, plot.width() as f64),
            y: VerticalScale::new(y_extent, plot.top as f64, plot.height() as f64),
        }
    }

    #[inline]
    pub fn to_screen(&self, p: Point) -> PixelPoint {
        PixelPoint::new(self.x.to_px(p.x), self.y.to_px(p.y))
    }
}
