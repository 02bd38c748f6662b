// File: crates/chart-core/tests/scale.rs
// Purpose: Linear axis mapping, degenerate extents, zero line clamping and inverse X.

use zeroline_core::scale::{HorizontalScale, VerticalScale};
use zeroline_core::{scale_to_axis, scale_to_vertical_axis, zero_line_pixel, Extent, ScaleTransform};

#[test]
fn flat_extent_collapses_to_axis_start() {
    let e = Some(Extent::new(0.0, 0.0));
    let out = scale_to_axis(&[0.0, 0.0, 0.0], e, 100.0);
    assert_eq!(out, vec![0.0, 0.0, 0.0]);

    // Anything maps to the start when the factor is zero.
    assert_eq!(scale_to_axis(&[3.0, -7.0], Some(Extent::new(4.0, 4.0)), 100.0), vec![0.0, 0.0]);
    assert_eq!(scale_to_axis(&[3.0], None, 100.0), vec![0.0]);
}

#[test]
fn horizontal_mapping_is_affine_and_monotonic() {
    let e = Some(Extent::new(-2.0, 8.0));
    let out = scale_to_axis(&[-2.0, 0.0, 3.0, 8.0], e, 200.0);
    assert_eq!(out, vec![0.0, 40.0, 100.0, 200.0]);
    assert!(out.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn vertical_mapping_flips_and_insets() {
    let e = Some(Extent::new(0.0, 10.0));
    let out = scale_to_vertical_axis(&[0.0, 5.0, 10.0], e, 100.0, 20.0);
    assert_eq!(out, vec![120.0, 70.0, 20.0]);

    // Flat extent: everything sits on the bottom edge.
    let flat = scale_to_vertical_axis(&[1.0, 1.0], Some(Extent::new(1.0, 1.0)), 100.0, 20.0);
    assert_eq!(flat, vec![120.0, 120.0]);
}

#[test]
fn zero_line_clamps_to_minimum() {
    // Zero inside the range.
    assert_eq!(zero_line_pixel(Some(Extent::new(-5.0, 5.0)), 0.0, 100.0, 10.0), 60.0);
    // Zero below the visible minimum uses the minimum's row.
    assert_eq!(zero_line_pixel(Some(Extent::new(2.0, 10.0)), 0.0, 100.0, 10.0), 110.0);
    // Non-default zero level.
    assert_eq!(zero_line_pixel(Some(Extent::new(0.0, 10.0)), 5.0, 100.0, 0.0), 50.0);
}

#[test]
fn horizontal_inverse_round_trips() {
    let s = HorizontalScale::new(Some(Extent::new(-3.5, 12.25)), 72.0, 928.0);
    for i in 0..=40 {
        let v = -3.5 + (12.25 + 3.5) * i as f64 / 40.0;
        let back = s.from_px(s.to_px(v));
        assert!((back - v).abs() < 1e-9, "{v} -> {back}");
    }
}

#[test]
fn degenerate_inverse_returns_minimum() {
    let s = HorizontalScale::new(Some(Extent::new(4.0, 4.0)), 10.0, 100.0);
    assert_eq!(s.factor(), 0.0);
    assert_eq!(s.to_px(4.0), 10.0);
    assert_eq!(s.from_px(55.0), 4.0);
}

#[test]
fn vertical_inverse_round_trips() {
    let s = VerticalScale::new(Some(Extent::new(-1.0, 1.0)), 24.0, 560.0);
    for v in [-1.0, -0.25, 0.0, 0.5, 1.0] {
        assert!((s.from_px(s.to_px(v)) - v).abs() < 1e-9);
    }
    assert_eq!(s.to_px(1.0), 24.0);
    assert_eq!(s.to_px(-1.0), 584.0);
}
