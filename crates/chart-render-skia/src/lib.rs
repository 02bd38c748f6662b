// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for zeroline-core layouts (RGBA buffers and PNG output).

use anyhow::{anyhow, Result};
use skia_safe as skia;
use tracing::debug;

use zeroline_core::geometry::PixelPoint;
use zeroline_core::layout::{ChartLayout, Line, PathRole};
use zeroline_core::path::PathShape;
use zeroline_core::{Chart, RenderOptions, Rgba};

pub mod text;

use text::{Anchor, TextShaper};

const LABEL_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 14.0;
const MARKER_RADIUS: f32 = 4.0;

pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Draw a full layout onto `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, layout: &ChartLayout, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(color(theme.background));

        let mut grid = stroke_paint(theme.grid, 1.0);
        for line in layout.x_grid.iter().chain(&layout.y_grid) {
            draw_line(canvas, line, &grid);
        }

        grid.set_color(color(theme.zero_line));
        for z in &layout.zero_lines {
            draw_line(canvas, &z.line, &grid);
        }

        for p in &layout.paths {
            let paint = match p.role {
                PathRole::Fill => fill_paint(p.color),
                PathRole::Stroke => stroke_paint(p.color, p.width),
            };
            canvas.draw_path(&to_path(&p.shape), &paint);
        }

        let axis = stroke_paint(theme.axis_line, 1.5);
        for line in &layout.axis_lines {
            draw_line(canvas, line, &axis);
        }

        if opts.draw_labels {
            self.draw_labels(canvas, layout, opts);
        }

        if let Some(hl) = &layout.highlight {
            let paint = stroke_paint(theme.highlight, 1.0);
            draw_line(canvas, &Line::new(hl.line.0, hl.line.1), &paint);
            let dot = fill_paint(theme.highlight);
            for m in &hl.markers {
                canvas.draw_circle(pt(m.at), MARKER_RADIUS, &dot);
            }
        }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, layout: &ChartLayout, opts: &RenderOptions) {
        let c = color(opts.theme.axis_label);
        let plot = &layout.plot;
        let below = plot.bottom as f32 + 18.0;
        for lab in &layout.x_labels {
            self.text.draw(canvas, &lab.text, lab.px as f32, below, LABEL_SIZE, c, Anchor::Center);
        }
        let left = plot.left as f32 - 8.0;
        for lab in &layout.y_labels {
            self.text.draw(canvas, &lab.text, left, lab.px as f32 + 4.0, LABEL_SIZE, c, Anchor::Right);
        }
        self.text.draw(canvas, &layout.x_title, plot.right as f32, below + 20.0, TITLE_SIZE, c, Anchor::Right);
        self.text.draw(canvas, &layout.y_title, plot.left as f32, plot.top as f32 - 8.0, TITLE_SIZE, c, Anchor::Left);
    }

    fn raster(&self, layout: &ChartLayout, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        self.draw(surface.canvas(), layout, opts);
        Ok(surface)
    }

    /// Render to straight-alpha RGBA8. Returns (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, layout: &ChartLayout, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(layout, opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut px = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(anyhow!("reading back raster pixels failed"));
        }
        Ok((px, opts.width, opts.height, stride))
    }

    pub fn render_to_png_bytes(&self, layout: &ChartLayout, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(layout, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        debug!(bytes = data.as_bytes().len(), paths = layout.paths.len(), "png encoded");
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(
        &self,
        layout: &ChartLayout,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(layout, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Lay out `chart` and write it as PNG in one step.
    pub fn render_chart_to_png(
        &self,
        chart: &Chart,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let layout = chart.layout(opts)?;
        self.render_to_png(&layout, opts, output_png_path)
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

#[inline]
fn pt(p: PixelPoint) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

fn stroke_paint(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color(c));
    paint
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

fn draw_line(canvas: &skia::Canvas, line: &Line, paint: &skia::Paint) {
    canvas.draw_line(pt(line.from), pt(line.to), paint);
}

fn to_path(shape: &PathShape) -> skia::Path {
    let mut path = skia::Path::new();
    let mut points = shape.points.iter();
    if let Some(&first) = points.next() {
        path.move_to(pt(first));
        for &p in points {
            path.line_to(pt(p));
        }
        if shape.closed {
            path.close();
        }
    }
    path
}
