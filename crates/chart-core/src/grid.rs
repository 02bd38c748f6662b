// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use crate::extent::Extent;

/// Upper bound on axis divisions; larger requests are capped.
pub const MAX_DIVISIONS: usize = 1000;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick values for an axis: the explicit labels when given, otherwise
/// `divisions + 1` evenly spaced values across the extent, with `divisions`
/// capped at [`MAX_DIVISIONS`].
pub fn tick_values(extent: Option<Extent>, explicit: Option<&[f64]>, divisions: usize) -> Vec<f64> {
    if let Some(labels) = explicit {
        return labels.to_vec();
    }
    match extent {
        Some(e) if e.is_degenerate() => vec![e.min],
        Some(e) => linspace(e.min, e.max, divisions.min(MAX_DIVISIONS).saturating_add(1)),
        None => Vec::new(),
    }
}
