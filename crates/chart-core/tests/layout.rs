// File: crates/chart-core/tests/layout.rs
// Purpose: Layout geometry: paths per segment, gridlines, labels and zero lines.

use zeroline_core::{Axis, Chart, ChartError, Insets, PathRole, RenderOptions, Series, Side};

fn crossing_chart(area: bool) -> Chart {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("s", vec![(0.0, 5.0), (1.0, -3.0), (2.0, 4.0)]).with_area(area));
    chart
}

#[test]
fn one_stroke_per_segment() {
    let chart = crossing_chart(false);
    let layout = chart.layout(&RenderOptions::default()).unwrap();
    assert_eq!(layout.paths.len(), 3);
    assert!(layout.paths.iter().all(|p| p.role == PathRole::Stroke));
    let sides: Vec<Side> = layout.paths.iter().map(|p| p.side).collect();
    assert_eq!(sides, vec![Side::Above, Side::Below, Side::Above]);

    let s = &chart.series()[0];
    assert_eq!(layout.paths[0].color, s.colors.above);
    assert_eq!(layout.paths[1].color, s.colors.below);
    assert!(layout.zero_lines.is_empty());
}

#[test]
fn area_adds_fills_before_strokes() {
    let chart = crossing_chart(true);
    let opts = RenderOptions::default();
    let layout = chart.layout(&opts).unwrap();
    assert_eq!(layout.paths.len(), 6);
    assert!(layout.paths[..3].iter().all(|p| p.role == PathRole::Fill));
    assert!(layout.paths[3..].iter().all(|p| p.role == PathRole::Stroke));

    assert_eq!(layout.zero_lines.len(), 1);
    let zero_y = layout.zero_lines[0].line.from.y;
    let fill = &layout.paths[0].shape;
    assert!(fill.closed);
    // Polygon starts and ends on the zero line.
    assert_eq!(fill.points.first().unwrap().y, zero_y);
    assert_eq!(fill.points.last().unwrap().y, zero_y);
    // The crossing sits exactly on the zero line as well.
    let stroke = &layout.paths[3].shape;
    assert!((stroke.points.last().unwrap().y - zero_y).abs() < 1e-9);
}

#[test]
fn hidden_line_and_short_series_draw_nothing() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("one", vec![(0.0, 1.0)]));
    chart.add_series(Series::with_data("hidden", vec![(0.0, 1.0), (1.0, 2.0)]).with_line(false));
    let layout = chart.layout(&RenderOptions::default()).unwrap();
    assert!(layout.paths.is_empty());
}

#[test]
fn gridlines_follow_labels() {
    let mut chart = crossing_chart(false);
    chart.set_x_axis(Axis::new("t").with_labels(vec![0.0, 0.5, 1.0, 1.5, 2.0]));
    chart.set_y_axis(Axis::new("v").with_formatter(|v| format!("{v:.1}%")));

    let layout = chart.layout(&RenderOptions::default()).unwrap();
    assert_eq!(layout.x_labels.len(), 5);
    assert_eq!(layout.x_grid.len(), 5);
    assert_eq!(layout.x_labels[1].text, "0.5");
    assert_eq!(layout.x_labels[0].px, layout.plot.left as f64);
    assert_eq!(layout.x_labels[4].px, layout.plot.right as f64);

    // Default y axis has 5 divisions -> 6 ticks, from -3 to 5.
    assert_eq!(layout.y_labels.len(), 6);
    assert_eq!(layout.y_labels[0].text, "-3.0%");
    assert_eq!(layout.y_labels[0].px, layout.plot.bottom as f64);
    assert_eq!(layout.y_grid[5].from.y, layout.plot.top as f64);
    assert_eq!(layout.x_title, "t");
}

#[test]
fn empty_chart_lays_out_axes_only() {
    let layout = Chart::new().layout(&RenderOptions::default()).unwrap();
    assert!(layout.paths.is_empty());
    assert!(layout.x_labels.is_empty());
    assert_eq!(layout.axis_lines[1].from.y, layout.plot.bottom as f64);
}

#[test]
fn insets_larger_than_surface() {
    let opts = RenderOptions { width: 80, height: 60, insets: Insets::new(50, 50, 10, 10), ..Default::default() };
    let err = crossing_chart(false).layout(&opts).unwrap_err();
    assert!(matches!(err, ChartError::PlotTooSmall { width: 80, height: 60 }));
}

#[test]
fn default_label_format() {
    let axis = Axis::new("x");
    assert_eq!(axis.format(3.0), "3");
    assert_eq!(axis.format(-0.0), "0");
    assert_eq!(axis.format(2.5), "2.5");
    assert_eq!(axis.format(1.0 / 3.0), "0.33");
}

#[test]
fn oversized_insets_are_rejected() {
    let wide = RenderOptions { width: i32::MAX, insets: Insets::new(0, u32::MAX, 0, 0), ..Default::default() };
    assert!(matches!(wide.plot_area(), Err(ChartError::PlotTooSmall { .. })));

    let wrapped = RenderOptions { insets: Insets::new(3_000_000_000, 0, 0, 0), ..Default::default() };
    assert!(matches!(crossing_chart(false).layout(&wrapped), Err(ChartError::PlotTooSmall { .. })));

    let negative = RenderOptions { width: -10, insets: Insets::new(0, 0, 0, 0), ..Default::default() };
    assert!(negative.plot_area().is_err());
}
