// File: crates/chart-core/src/extent.rs
// Summary: Data-space extents per axis, unioned over series, labels and user bounds.

use serde::{Deserialize, Serialize};

/// Closed data range of one axis. Contract: `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Build an extent from two bounds in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b { Self { min: a, max: b } } else { Self { min: b, max: a } }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn is_degenerate(&self) -> bool { self.max == self.min }

    /// Grow to include `v`; non-finite values are ignored.
    pub fn include(&mut self, v: f64) {
        if !v.is_finite() {
            return;
        }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    /// Extent of an iterator of values, `None` when it yields nothing finite.
    pub fn of_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut out: Option<Extent> = None;
        for v in values {
            out = union(out, v);
        }
        out
    }
}

fn union(acc: Option<Extent>, v: f64) -> Option<Extent> {
    if !v.is_finite() {
        return acc;
    }
    match acc {
        Some(mut e) => {
            e.include(v);
            Some(e)
        }
        None => Some(Extent { min: v, max: v }),
    }
}

/// Which coordinate of a point an extent is computed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    X,
    Y,
}

/// Union of every series' values on `dim`, the explicit label values, and the
/// explicit bounds. Explicit bounds can only widen the data range.
pub fn extent_of<'a, S>(
    series: S,
    dim: Dimension,
    explicit_min: Option<f64>,
    explicit_max: Option<f64>,
    explicit_labels: Option<&[f64]>,
) -> Option<Extent>
where
    S: IntoIterator<Item = &'a crate::Series>,
{
    let data = series.into_iter().flat_map(|s| s.points().iter()).map(|p| match dim {
        Dimension::X => p.x,
        Dimension::Y => p.y,
    });
    let labels = explicit_labels.unwrap_or(&[]).iter().copied();
    let bounds = explicit_min.into_iter().chain(explicit_max);
    Extent::of_values(data.chain(labels).chain(bounds))
}
