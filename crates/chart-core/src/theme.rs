// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors and per-series above/below color pairs.

use serde::{Deserialize, Serialize};

use crate::types::{Rgba, Side};

/// Stroke colors for the parts of a series above and below its zero level.
/// Area fills use the same colors at reduced alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub above: Rgba,
    pub below: Rgba,
}

impl ColorPair {
    pub const fn new(above: Rgba, below: Rgba) -> Self {
        Self { above, below }
    }

    /// Same color on both sides.
    pub const fn uniform(color: Rgba) -> Self {
        Self { above: color, below: color }
    }

    pub fn for_side(&self, side: Side) -> Rgba {
        match side {
            Side::Above => self.above,
            Side::Below => self.below,
        }
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Theme::dark().series
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub highlight: Rgba,
    pub zero_line: Rgba,
    pub series: ColorPair,
    /// Alpha applied to the series colors when filling areas.
    pub area_alpha: u8,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            grid: Rgba::from_argb(255, 40, 40, 45),
            axis_line: Rgba::from_argb(255, 180, 180, 190),
            axis_label: Rgba::from_argb(255, 235, 235, 245),
            highlight: Rgba::from_argb(255, 255, 230, 70),
            zero_line: Rgba::from_argb(255, 150, 150, 160),
            series: ColorPair::new(Rgba::from_argb(255, 40, 200, 120), Rgba::from_argb(255, 220, 80, 80)),
            area_alpha: 96,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_argb(255, 250, 250, 252),
            grid: Rgba::from_argb(255, 230, 230, 235),
            axis_line: Rgba::from_argb(255, 60, 60, 70),
            axis_label: Rgba::from_argb(255, 20, 20, 30),
            highlight: Rgba::from_argb(255, 30, 120, 240),
            zero_line: Rgba::from_argb(255, 100, 100, 110),
            series: ColorPair::new(Rgba::from_argb(255, 20, 160, 90), Rgba::from_argb(255, 200, 60, 60)),
            area_alpha: 80,
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: Rgba::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: Rgba::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: Rgba::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: Rgba::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            highlight: Rgba::from_argb(255, 0xb5, 0x89, 0x00),  // yellow
            zero_line: Rgba::from_argb(255, 0x83, 0x94, 0x96),  // base0
            series: ColorPair::new(
                Rgba::from_argb(255, 0x2a, 0xa1, 0x98), // cyan/green
                Rgba::from_argb(255, 0xdc, 0x32, 0x2f), // red
            ),
            area_alpha: 96,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::from_argb(255, 0x00, 0x00, 0x00),
            grid: Rgba::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: Rgba::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: Rgba::from_argb(255, 0xff, 0xff, 0xff),
            highlight: Rgba::from_argb(255, 0xff, 0xff, 0x00),
            zero_line: Rgba::from_argb(255, 0xcc, 0xcc, 0xcc),
            series: ColorPair::new(Rgba::from_argb(255, 0x00, 0xff, 0x00), Rgba::from_argb(255, 0xff, 0x00, 0x00)),
            area_alpha: 120,
        }
    }

    /// Fill color for an area on `side` of a series using `colors`.
    pub fn area_fill(&self, colors: &ColorPair, side: Side) -> Rgba {
        colors.for_side(side).with_alpha(self.area_alpha)
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
