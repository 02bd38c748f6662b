// File: crates/chart-core/tests/touch.rs
// Purpose: Neighbor lookup and pixel touch resolution.

use zeroline_core::scale::ScaleTransform;
use zeroline_core::{neighbors, Chart, Neighbors, RenderOptions, Series, TouchResolution};

#[test]
fn neighbors_between_samples() {
    let n = neighbors([0.0, 1.0, 2.0], 1.5);
    assert_eq!(n, Neighbors { left: Some(1), right: Some(2) });
}

#[test]
fn neighbors_on_a_sample_and_at_the_edges() {
    assert_eq!(neighbors([0.0, 1.0, 2.0], 1.0), Neighbors { left: Some(1), right: Some(1) });
    assert_eq!(neighbors([0.0, 1.0, 2.0], -1.0), Neighbors { left: None, right: Some(0) });
    assert_eq!(neighbors([0.0, 1.0, 2.0], 9.0), Neighbors { left: Some(2), right: None });
    assert_eq!(neighbors(std::iter::empty(), 1.0), Neighbors::default());
}

#[test]
fn ties_keep_first_seen() {
    let n = neighbors([0.0, 1.0, 1.0, 3.0], 2.0);
    assert_eq!(n.left, Some(1));
    let n = neighbors([0.0, 3.0, 3.0], 2.0);
    assert_eq!(n.right, Some(1));
}

fn chart() -> Chart {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (1.0, -1.0), (2.0, 2.0)]));
    chart.add_series(Series::with_data("b", vec![(1.8, 0.5), (2.0, 0.0)]));
    chart
}

#[test]
fn touch_outside_plot() {
    let chart = chart();
    let opts = RenderOptions::default();
    assert_eq!(chart.resolve_touch(&opts, 10.0).unwrap(), TouchResolution::OutsidePlot);
    let right_of_plot = (opts.width - opts.insets.right as i32 + 5) as f64;
    assert_eq!(chart.resolve_touch(&opts, right_of_plot).unwrap(), TouchResolution::OutsidePlot);
}

#[test]
fn touch_inside_reports_left_neighbors() {
    let chart = chart();
    let opts = RenderOptions::default();
    let px = chart.scales(&opts).unwrap().x.to_px(1.5);

    match chart.resolve_touch(&opts, px).unwrap() {
        TouchResolution::Inside { x, hits, .. } => {
            assert!((x - 1.5).abs() < 1e-9);
            // Series "b" starts at 1.8, so it has nothing at or left of 1.5.
            assert_eq!(hits, vec![Some(1), None]);
        }
        other => panic!("expected inside, got {other:?}"),
    }
}

#[test]
fn touch_highlight_geometry() {
    let chart = chart();
    let opts = RenderOptions::default();
    let scales = chart.scales(&opts).unwrap();
    let px = scales.x.to_px(2.0);

    let (layout, res) = chart.layout_with_touch(&opts, px).unwrap();
    assert!(res.is_inside());
    let hl = layout.highlight.expect("highlight");
    assert_eq!(hl.line.0.x, px);
    assert_eq!(hl.line.0.y, layout.plot.top as f64);
    assert_eq!(hl.line.1.y, layout.plot.bottom as f64);
    assert_eq!(hl.markers.len(), 2);
    assert_eq!(hl.markers[0].index, 2);
    assert_eq!(hl.markers[1].index, 1);

    let (layout, res) = chart.layout_with_touch(&opts, 0.0).unwrap();
    assert_eq!(res, TouchResolution::OutsidePlot);
    assert!(layout.highlight.is_none());
}
