// File: crates/bars-demo/src/main.rs
// Summary: Animates a stack of bar charts from background threads and captures frames to PNG.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use bars_core::animate::spawn_sine_driver;
use bars_core::{theme, threshold_colors, BarChart, Color, Size};
use bars_render_skia::{Frame, SkiaRenderer};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bars-demo", about = "Render animated bar charts to PNG frames")]
struct Args {
    /// Bars per chart
    #[arg(long, default_value_t = 13)]
    bars: usize,
    /// Charts stacked vertically
    #[arg(long, default_value_t = 13)]
    charts: usize,
    /// Frames to capture
    #[arg(long, default_value_t = 10)]
    frames: usize,
    /// Milliseconds between animation ticks and captures
    #[arg(long, default_value_t = 50)]
    interval_ms: u64,
    #[arg(long, default_value_t = 5.0)]
    spacing: f32,
    #[arg(long, default_value_t = 30.0)]
    bar_width: f32,
    #[arg(long, default_value_t = 50.0)]
    bar_height: f32,
    /// Frame width in pixels (grown to the charts' minimum if smaller)
    #[arg(long, default_value_t = 640.0)]
    width: f32,
    /// Draw integer percentage labels on each bar
    #[arg(long)]
    percent: bool,
    /// Use the theme's accent color instead of traffic-light fills
    #[arg(long)]
    plain: bool,
    /// Theme preset: dark, light, solarized-dark, solarized-light, high-contrast-dark
    #[arg(long, default_value = "dark")]
    theme: String,
    #[arg(long, default_value = "target/out/bars")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let theme = theme::find(&args.theme);

    let mut frame = Frame::new();
    for _ in 0..args.charts {
        let mut chart = BarChart::new(args.bars)
            .context("building chart")?
            .with_spacing(args.spacing)
            .with_bar_min_size(Size::new(args.bar_width, args.bar_height))
            .with_percent_labels(args.percent)
            .with_theme(theme);
        if !args.plain {
            chart = chart.with_color_fn(threshold_colors(vec![(0.2, Color::RED), (0.4, Color::YELLOW)], Color::GREEN));
        }
        frame.push(chart);
    }
    let size = frame.layout(args.width);
    log::info!("{} charts x {} bars, frame {}x{}", args.charts, args.bars, size.width, size.height);

    let interval = Duration::from_millis(args.interval_ms);
    let stop = Arc::new(AtomicBool::new(false));
    let drivers: Vec<_> = frame
        .charts()
        .iter()
        .map(|c| spawn_sine_driver(Arc::clone(c.series()), interval, Arc::clone(&stop), || {}))
        .collect();

    let renderer = SkiaRenderer::new(&theme);
    let mut result = Ok(());
    for n in 0..args.frames {
        std::thread::sleep(interval);
        frame.refresh();
        let out = args.out.join(format!("frame_{n:04}.png"));
        if let Err(e) = renderer.render_to_png(&frame, &out) {
            result = Err(e).with_context(|| format!("failed to write '{}'", out.display()));
            break;
        }
        println!("Wrote {}", out.display());
    }

    stop.store(true, Ordering::Relaxed);
    for d in drivers {
        if d.join().is_err() {
            log::warn!("animation driver panicked");
        }
    }
    result
}
