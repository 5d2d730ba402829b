// File: crates/bars-window-demo/src/main.rs
// Summary: Windowed demo; driver threads animate each chart and wake the event loop to
// refresh and blit the stacked charts (CPU RGBA via softbuffer).

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use bars_core::animate::spawn_sine_driver;
use bars_core::{theme, threshold_colors, BarChart, Color, Size};
use bars_render_skia::{Frame, SkiaRenderer};
use clap::Parser;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "bars-window-demo", about = "Animated bar charts in a window")]
struct Args {
    #[arg(long, default_value_t = 13)]
    bars: usize,
    #[arg(long, default_value_t = 13)]
    charts: usize,
    #[arg(long, default_value_t = 50)]
    interval_ms: u64,
    #[arg(long, default_value_t = 5.0)]
    spacing: f32,
    #[arg(long, default_value_t = 30.0)]
    bar_width: f32,
    #[arg(long, default_value_t = 50.0)]
    bar_height: f32,
    #[arg(long)]
    percent: bool,
    #[arg(long, default_value = "dark")]
    theme: String,
}

/// Sent by a driver thread after it wrote a new frame of values.
#[derive(Debug, Clone, Copy)]
struct Tick;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let theme = theme::find(&args.theme);

    let mut frame = Frame::new();
    for _ in 0..args.charts {
        let chart = BarChart::new(args.bars)
            .context("building chart")?
            .with_spacing(args.spacing)
            .with_bar_min_size(Size::new(args.bar_width, args.bar_height))
            .with_percent_labels(args.percent)
            .with_theme(theme)
            .with_color_fn(threshold_colors(vec![(0.2, Color::RED), (0.4, Color::YELLOW)], Color::GREEN));
        frame.push(chart);
    }
    let min = frame.min_size();

    let event_loop = EventLoopBuilder::<Tick>::with_user_event().build();
    let window = WindowBuilder::new()
        .with_title("Bars Demo")
        // chart heights are raster pixels, so the window is sized in physical pixels
        .with_inner_size(winit::dpi::PhysicalSize::new(min.width.ceil() as u32, min.height.ceil() as u32))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    let stop = Arc::new(AtomicBool::new(false));
    let interval = Duration::from_millis(args.interval_ms);
    let mut drivers: Vec<_> = frame
        .charts()
        .iter()
        .map(|chart| {
            let proxy = event_loop.create_proxy();
            // Sending fails only once the loop has exited.
            spawn_sine_driver(Arc::clone(chart.series()), interval, Arc::clone(&stop), move || {
                let _ = proxy.send_event(Tick);
            })
        })
        .collect();

    let renderer = SkiaRenderer::new(&theme);
    let background = theme.background.to_u32() & 0x00ff_ffff;
    frame.layout(window.inner_size().width as f32);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    stop.store(true, Ordering::Relaxed);
                    for d in drivers.drain(..) {
                        if d.join().is_err() {
                            log::warn!("animation driver panicked");
                        }
                    }
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    frame.layout(new_size.width as f32);
                    window.request_redraw();
                }
                _ => {}
            },
            Event::UserEvent(Tick) => {
                frame.refresh();
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    log::error!("surface resize failed: {e:?}");
                    return;
                }
                let (rgba, _, fh, stride) = match renderer.render_to_rgba8(&frame) {
                    Ok(out) => out,
                    Err(e) => {
                        log::error!("render failed: {e:#}");
                        return;
                    }
                };
                let mut buffer = match surface.buffer_mut() {
                    Ok(b) => b,
                    Err(e) => {
                        log::error!("no frame buffer: {e:?}");
                        return;
                    }
                };
                let (w, h) = (w.get() as usize, h.get() as usize);
                buffer.fill(background);
                for y in 0..h.min(fh as usize) {
                    let row = &rgba[y * stride..y * stride + stride];
                    for (x, px) in row.chunks_exact(4).take(w).enumerate() {
                        // softbuffer pixels are 0RGB
                        buffer[y * w + x] = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
                    }
                }
                if let Err(e) = buffer.present() {
                    log::error!("present error: {e:?}");
                }
            }
            _ => {}
        }
    })
}
