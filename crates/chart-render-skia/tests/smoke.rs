// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use zeroline_core::{Chart, RenderOptions, Series};
use zeroline_render_skia::SkiaRenderer;

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new();
    chart.add_series(
        Series::with_data("s", vec![(0.0, 1.0), (1.0, -2.0), (2.0, 1.5), (3.0, 3.5), (4.0, -0.5)]).with_area(true),
    );

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    let renderer = SkiaRenderer::new();
    renderer.render_chart_to_png(&chart, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let layout = chart.layout(&opts).expect("layout");
    let bytes = renderer.render_to_png_bytes(&layout, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_with_touch_highlight() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_values("v", &[1.0, -1.0, 2.0, -2.0]));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (layout, _) = chart.layout_with_touch(&opts, 400.0).expect("layout");
    assert!(layout.highlight.is_some());
    let bytes = SkiaRenderer::new().render_to_png_bytes(&layout, &opts).expect("render bytes");
    assert!(!bytes.is_empty());
}
