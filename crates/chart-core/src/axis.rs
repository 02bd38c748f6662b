// File: crates/chart-core/src/axis.rs
// Summary: Axis configuration: title, user bounds, explicit labels and label formatting.

use std::fmt;
use std::sync::Arc;

/// Value-to-text function used for tick labels.
pub type LabelFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Integers print without decimals, everything else with at most two.
pub fn default_format(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{:.0}", v + 0.0);
    }
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[derive(Clone)]
pub struct Axis {
    pub title: String,
    /// Value that must be visible at the low end; widens the data range only.
    pub min: Option<f64>,
    /// Value that must be visible at the high end; widens the data range only.
    pub max: Option<f64>,
    /// Explicit tick values. Also included in the extent.
    pub labels: Option<Vec<f64>>,
    /// Number of automatic grid divisions when `labels` is `None`.
    pub divisions: usize,
    pub formatter: LabelFormatter,
}

impl Axis {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            min: None,
            max: None,
            labels: None,
            divisions: 5,
            formatter: Arc::new(default_format),
        }
    }

    pub fn default_x() -> Self {
        let mut a = Self::new("X");
        a.divisions = 9;
        a
    }

    pub fn default_y() -> Self {
        Self::new("Y")
    }

    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_labels(mut self, labels: Vec<f64>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.formatter = Arc::new(f);
        self
    }

    pub fn format(&self, v: f64) -> String {
        (self.formatter)(v)
    }
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("title", &self.title)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("labels", &self.labels)
            .field("divisions", &self.divisions)
            .finish_non_exhaustive()
    }
}
