// File: crates/chart-core/src/chart.rs
// Summary: Chart struct: owns series and axes, keeps extents current, builds layouts.

use tracing::{debug, trace};

use crate::axis::Axis;
use crate::config::RenderOptions;
use crate::error::{ChartError, Result};
use crate::extent::{extent_of, Dimension, Extent};
use crate::layout::{self, ChartLayout};
use crate::scale::ChartScales;
use crate::series::Series;
use crate::touch::{self, TouchResolution};
use crate::types::Point;

#[derive(Clone, Debug)]
pub struct Chart {
    series: Vec<Series>,
    x_axis: Axis,
    y_axis: Axis,
    x_extent: Option<Extent>,
    y_extent: Option<Extent>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            x_extent: None,
            y_extent: None,
        }
    }

    /// Add a series and return its index.
    pub fn add_series(&mut self, series: Series) -> usize {
        self.series.push(series);
        self.recompute_extents();
        self.series.len() - 1
    }

    /// Replace every series.
    pub fn set_series(&mut self, series: Vec<Series>) {
        self.series = series;
        self.recompute_extents();
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn series_at(&self, index: usize) -> Result<&Series> {
        self.series.get(index).ok_or(ChartError::SeriesIndex { index, len: self.series.len() })
    }

    fn series_at_mut(&mut self, index: usize) -> Result<&mut Series> {
        let len = self.series.len();
        self.series.get_mut(index).ok_or(ChartError::SeriesIndex { index, len })
    }

    /// Mutate every series in place, then refresh the extents.
    pub fn update_series<F: FnMut(&mut Series)>(&mut self, f: F) {
        self.series.iter_mut().for_each(f);
        self.recompute_extents();
    }

    /// Append one point to series `index`. Returns true when a new segment was
    /// opened, so a renderer may redraw only the last segment otherwise.
    pub fn append_point(&mut self, index: usize, point: Point) -> Result<bool> {
        let opened = self.series_at_mut(index)?.append_point(point)?;
        grow(&mut self.x_extent, point.x);
        grow(&mut self.y_extent, point.y);
        trace!(series = index, x = point.x, y = point.y, opened, "point appended");
        Ok(opened)
    }

    pub fn set_zero_level(&mut self, index: usize, zero_level: f64) -> Result<()> {
        self.series_at_mut(index)?.set_zero_level(zero_level);
        Ok(())
    }

    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }

    pub fn set_x_axis(&mut self, axis: Axis) {
        self.x_axis = axis;
        self.recompute_extents();
    }

    pub fn set_y_axis(&mut self, axis: Axis) {
        self.y_axis = axis;
        self.recompute_extents();
    }

    pub fn x_extent(&self) -> Option<Extent> { self.x_extent }
    pub fn y_extent(&self) -> Option<Extent> { self.y_extent }

    pub fn recompute_extents(&mut self) {
        self.x_extent = axis_extent(&self.series, &self.x_axis, Dimension::X);
        self.y_extent = axis_extent(&self.series, &self.y_axis, Dimension::Y);
        debug!(x = ?self.x_extent, y = ?self.y_extent, series = self.series.len(), "extents recomputed");
    }

    pub fn scales(&self, opts: &RenderOptions) -> Result<ChartScales> {
        let plot = opts.plot_area()?;
        Ok(ChartScales::new(self.x_extent, self.y_extent, &plot))
    }

    /// Geometry for everything except a touch highlight.
    pub fn layout(&self, opts: &RenderOptions) -> Result<ChartLayout> {
        layout::build(self, opts)
    }

    /// Geometry including the highlight for a touch at pixel X `px`.
    pub fn layout_with_touch(&self, opts: &RenderOptions, px: f64) -> Result<(ChartLayout, TouchResolution)> {
        let mut out = layout::build(self, opts)?;
        let scales = ChartScales::new(self.x_extent, self.y_extent, &out.plot);
        let resolution = touch::resolve(&self.series, &scales, &out.plot, px);
        out.highlight = touch::highlight(&self.series, &scales, &out.plot, &resolution);
        Ok((out, resolution))
    }

    pub fn resolve_touch(&self, opts: &RenderOptions, px: f64) -> Result<TouchResolution> {
        let plot = opts.plot_area()?;
        let scales = ChartScales::new(self.x_extent, self.y_extent, &plot);
        Ok(touch::resolve(&self.series, &scales, &plot, px))
    }
}

fn axis_extent(series: &[Series], axis: &Axis, dim: Dimension) -> Option<Extent> {
    extent_of(series, dim, axis.min, axis.max, axis.labels.as_deref())
}

fn grow(extent: &mut Option<Extent>, v: f64) {
    match extent {
        Some(e) => e.include(v),
        None => *extent = Extent::of_values([v]),
    }
}
