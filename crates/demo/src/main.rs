// File: crates/demo/src/main.rs
// Summary: Demo loads an x,y CSV (optionally a JSON config) and renders a zero-level chart to PNG.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use zeroline_core::{Chart, ChartConfig, Point, Series, TouchResolution};
use zeroline_render_skia::SkiaRenderer;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "data/sample.csv".to_string());
    let config_path = args.next();

    let (path, used_alt) = resolve_path(&raw)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let cfg = match &config_path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading config '{p}'"))?;
            ChartConfig::from_json(&text).with_context(|| format!("parsing config '{p}'"))?
        }
        None => ChartConfig::default(),
    };

    let points = load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if points.len() < 2 {
        anyhow::bail!("need at least two rows to draw a line, got {}", points.len());
    }

    let mut chart = Chart::new();
    let label = path.file_stem().and_then(|s| s.to_str()).unwrap_or("series").to_string();
    let idx = chart.add_series(Series::new(label));
    cfg.apply(&mut chart);

    // Feed rows one at a time, the way a live source would.
    for p in &points {
        chart.append_point(idx, *p)?;
    }
    info!(rows = points.len(), segments = chart.series()[idx].segments().len(), "series loaded");

    let opts = cfg.render_options();
    let renderer = SkiaRenderer::new();

    let out = out_name_with(&path, "chart");
    renderer.render_chart_to_png(&chart, &opts, &out)?;
    info!(out = %out.display(), "wrote chart");

    // Same chart with a highlight at the middle of the plot
    let plot = opts.plot_area()?;
    let mid = (plot.left + plot.right) as f64 * 0.5;
    let (layout, touch) = chart.layout_with_touch(&opts, mid)?;
    if let TouchResolution::Inside { x, hits, .. } = &touch {
        info!(x, ?hits, "touch resolved");
    }
    let out_hl = out_name_with(&path, "highlight");
    renderer.render_to_png(&layout, &opts, &out_hl)?;
    info!(out = %out_hl.display(), "wrote highlighted chart");

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("{stem}_{suffix}.png"))
}

/// Load `x,y` rows. Recognised headers pick the columns; a file with a single
/// numeric column is read as y values with x = row index.
fn load_xy_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "timestamp", "t", "index", "date"]);
    let i_y = idx(&["y", "value", "close", "v", "delta"]).or(if headers.len() == 1 { Some(0) } else { None });
    let Some(i_y) = i_y else {
        anyhow::bail!("no y column among {:?}", headers);
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let x = match i_x {
            Some(ix) => parse(ix),
            None => Some(row as f64),
        };
        match (x, parse(i_y)) {
            (Some(x), Some(y)) => match Point::try_new(x, y) {
                Ok(p) => out.push(p),
                Err(e) => warn!(row, %e, "skipping row"),
            },
            _ => warn!(row, "skipping unparsable row"),
        }
    }
    Ok(out)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
