// File: crates/chart-core/src/layout.rs
// Summary: Renderer-agnostic chart geometry: gridlines, axes, labels, zero lines and series paths.

use crate::config::RenderOptions;
use crate::error::Result;
use crate::extent::Extent;
use crate::geometry::{PixelPoint, RectI32};
use crate::grid::tick_values;
use crate::path::{area_path, line_path, PathShape};
use crate::scale::{ChartScales, ScaleTransform};
use crate::touch::Highlight;
use crate::types::{Rgba, Side};
use crate::{Axis, Chart};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: PixelPoint,
    pub to: PixelPoint,
}

impl Line {
    pub const fn new(from: PixelPoint, to: PixelPoint) -> Self {
        Self { from, to }
    }
}

/// A tick label; `px` is its position along the axis it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub value: f64,
    pub text: String,
    pub px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathRole {
    Stroke,
    Fill,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPath {
    pub series: usize,
    pub side: Side,
    pub role: PathRole,
    pub color: Rgba,
    pub width: f32,
    pub shape: PathShape,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZeroLine {
    pub series: usize,
    pub line: Line,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub plot: RectI32,
    pub x_grid: Vec<Line>,
    pub y_grid: Vec<Line>,
    /// Left and bottom plot edges.
    pub axis_lines: [Line; 2],
    pub x_labels: Vec<AxisLabel>,
    pub y_labels: Vec<AxisLabel>,
    pub x_title: String,
    pub y_title: String,
    pub zero_lines: Vec<ZeroLine>,
    /// Fills first, then strokes, in series order.
    pub paths: Vec<SeriesPath>,
    pub highlight: Option<Highlight>,
}

pub(crate) fn build(chart: &Chart, opts: &RenderOptions) -> Result<ChartLayout> {
    let plot = opts.plot_area()?;
    let scales = ChartScales::new(chart.x_extent(), chart.y_extent(), &plot);
    let (l, t, r, b) = (plot.left as f64, plot.top as f64, plot.right as f64, plot.bottom as f64);

    let x_labels = labels(chart.x_axis(), chart.x_extent(), &scales.x);
    let y_labels = labels(chart.y_axis(), chart.y_extent(), &scales.y);
    let x_grid = x_labels
        .iter()
        .map(|lab| Line::new(PixelPoint::new(lab.px, t), PixelPoint::new(lab.px, b)))
        .collect();
    let y_grid = y_labels
        .iter()
        .map(|lab| Line::new(PixelPoint::new(l, lab.px), PixelPoint::new(r, lab.px)))
        .collect();

    let mut fills = Vec::new();
    let mut strokes = Vec::new();
    let mut zero_lines = Vec::new();
    for (si, s) in chart.series().iter().enumerate() {
        let zero_px = scales.y.zero_line_px(s.zero_level());
        if s.show_area {
            zero_lines.push(ZeroLine {
                series: si,
                line: Line::new(PixelPoint::new(l, zero_px), PixelPoint::new(r, zero_px)),
            });
        }
        for seg in s.segments().iter().filter(|seg| seg.is_drawable()) {
            if s.show_area {
                fills.push(SeriesPath {
                    series: si,
                    side: seg.side,
                    role: PathRole::Fill,
                    color: opts.theme.area_fill(&s.colors, seg.side),
                    width: 0.0,
                    shape: area_path(seg, &scales, zero_px),
                });
            }
            if s.show_line {
                strokes.push(SeriesPath {
                    series: si,
                    side: seg.side,
                    role: PathRole::Stroke,
                    color: s.colors.for_side(seg.side),
                    width: s.line_width,
                    shape: line_path(seg, &scales),
                });
            }
        }
    }
    fills.extend(strokes);

    Ok(ChartLayout {
        plot,
        x_grid,
        y_grid,
        axis_lines: [
            Line::new(PixelPoint::new(l, t), PixelPoint::new(l, b)),
            Line::new(PixelPoint::new(l, b), PixelPoint::new(r, b)),
        ],
        x_labels,
        y_labels,
        x_title: chart.x_axis().title.clone(),
        y_title: chart.y_axis().title.clone(),
        zero_lines,
        paths: fills,
        highlight: None,
    })
}

fn labels<S: ScaleTransform>(axis: &Axis, extent: Option<Extent>, scale: &S) -> Vec<AxisLabel> {
    tick_values(extent, axis.labels.as_deref(), axis.divisions)
        .into_iter()
        .map(|value| AxisLabel { value, text: axis.format(value), px: scale.to_px(value) })
        .collect()
}
