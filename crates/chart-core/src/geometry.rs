// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::error::{ChartError, Result};
use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Plot area of a `width` x `height` surface after removing `insets`.
    /// Fails with `PlotTooSmall` when an inset does not fit in `i32` or the
    /// remaining area is empty.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Result<Self> {
        let too_small = ChartError::PlotTooSmall { width, height };
        let inset = |v: u32| i32::try_from(v).ok();
        let (Some(left), Some(right), Some(top), Some(bottom)) =
            (inset(insets.left), inset(insets.right), inset(insets.top), inset(insets.bottom))
        else {
            return Err(too_small);
        };
        let (Some(r), Some(b)) = (width.checked_sub(right), height.checked_sub(bottom)) else {
            return Err(too_small);
        };
        match (r.checked_sub(left), b.checked_sub(top)) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Ok(Self::from_ltrb(left, top, r, b)),
            _ => Err(too_small),
        }
    }

    /// Inclusive on both edges.
    pub fn contains_x(&self, px: f64) -> bool {
        px >= self.left as f64 && px <= self.right as f64
    }
}

/// Pixel-space point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
