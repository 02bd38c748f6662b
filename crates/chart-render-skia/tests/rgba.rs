// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use zeroline_core::{Chart, PathRole, RenderOptions, Rgba, Series, Side, Theme};
use zeroline_render_skia::SkiaRenderer;

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("s", vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let layout = chart.layout(&opts).expect("layout");
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(&layout, &opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is outside the plot and carries the background color.
    let bg = Theme::dark().background;
    assert_eq!(&px[..4], &[bg.r, bg.g, bg.b, bg.a]);
}

fn pixel(px: &[u8], stride: usize, x: f64, y: f64) -> [u8; 4] {
    let i = y.floor() as usize * stride + x.floor() as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn close(got: [u8; 4], want: Rgba) -> bool {
    let want = [want.r, want.g, want.b, want.a];
    got.iter().zip(want).all(|(&g, w)| g.abs_diff(w) <= 2)
}

#[test]
fn segments_paint_with_their_side_colors() {
    let mut chart = Chart::new();
    chart.add_series(
        Series::with_data("s", vec![(0.0, 4.0), (1.0, 4.0), (2.0, -4.0), (3.0, -4.0)]).with_area(true),
    );
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let layout = chart.layout(&opts).expect("layout");
    let (px, _, _, stride) = SkiaRenderer::new().render_to_rgba8(&layout, &opts).expect("rgba render");

    let colors = chart.series()[0].colors;
    let zero_px = layout.zero_lines[0].line.from.y;
    let path = |role: PathRole, side: Side| {
        layout.paths.iter().find(|p| p.role == role && p.side == side).expect("path present")
    };

    // Midway along the flat top run of the above stroke.
    let top = &path(PathRole::Stroke, Side::Above).shape.points;
    let (mx, my) = ((top[0].x + top[1].x) / 2.0, top[0].y);
    let got = pixel(&px, stride, mx, my);
    assert!(close(got, colors.above), "stroke pixel {got:?}, want {:?}", colors.above);

    // Inside each fill, between the stroke and the zero line.
    let above = pixel(&px, stride, mx, (my + zero_px) / 2.0);
    assert!(above[1] > above[0] + 30, "above fill {above:?} is not tinted green");

    let bottom = &path(PathRole::Stroke, Side::Below).shape.points;
    let n = bottom.len();
    let (bx, by) = ((bottom[n - 2].x + bottom[n - 1].x) / 2.0, bottom[n - 1].y);
    let below = pixel(&px, stride, bx, (by + zero_px) / 2.0);
    assert!(below[0] > below[1] + 30, "below fill {below:?} is not tinted red");
    assert_ne!(above, below);
}
