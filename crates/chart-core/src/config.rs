// File: crates/chart-core/src/config.rs
// Summary: Render options and the serializable chart configuration (JSON).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::grid::MAX_DIVISIONS;
use crate::theme::{self, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Chart;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl RenderOptions {
    pub fn plot_area(&self) -> Result<RectI32> {
        RectI32::plot_area(self.width, self.height, &self.insets)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

/// Per-axis overrides. Unset fields keep the axis' current value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub title: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub labels: Option<Vec<f64>>,
    pub divisions: Option<usize>,
}

impl AxisConfig {
    pub fn apply(&self, mut axis: Axis) -> Axis {
        if let Some(t) = &self.title { axis.title = t.clone(); }
        if self.min.is_some() { axis.min = self.min; }
        if self.max.is_some() { axis.max = self.max; }
        if self.labels.is_some() { axis.labels = self.labels.clone(); }
        if let Some(d) = self.divisions { axis.divisions = d; }
        axis
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: String,
    pub draw_labels: bool,
    pub zero_level: f64,
    pub show_line: bool,
    pub show_area: bool,
    pub x: AxisConfig,
    pub y: AxisConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: "dark".to_string(),
            draw_labels: true,
            zero_level: 0.0,
            show_line: true,
            show_area: false,
            x: AxisConfig::default(),
            y: AxisConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a JSON document; missing keys take defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: ChartConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.zero_level.is_finite() {
            return Err(ChartError::Config(format!("zero_level must be finite, got {}", self.zero_level)));
        }
        for (name, axis) in [("x", &self.x), ("y", &self.y)] {
            if let Some(d) = axis.divisions.filter(|&d| d > MAX_DIVISIONS) {
                return Err(ChartError::Config(format!(
                    "{name}.divisions must be at most {MAX_DIVISIONS}, got {d}"
                )));
            }
        }
        self.render_options().plot_area().map(|_| ())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            insets: self.insets,
            theme: theme::find(&self.theme),
            draw_labels: self.draw_labels,
        }
    }

    /// Push axis overrides, zero level and display flags into `chart`.
    pub fn apply(&self, chart: &mut Chart) {
        chart.set_x_axis(self.x.apply(chart.x_axis().clone()));
        chart.set_y_axis(self.y.apply(chart.y_axis().clone()));
        let theme = theme::find(&self.theme);
        chart.update_series(|s| {
            s.show_line = self.show_line;
            s.show_area = self.show_area;
            s.colors = theme.series;
            s.set_zero_level(self.zero_level);
        });
        debug!(theme = %self.theme, zero_level = self.zero_level, "chart config applied");
    }
}
