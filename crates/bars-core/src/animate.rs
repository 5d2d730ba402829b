// File: crates/bars-core/src/animate.rs
// Summary: Sine-wave driver that animates a series from a background thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::series::BarSeries;

/// Phase advance per tick.
pub const PHASE_STEP: f64 = 0.1;
/// Phase offset between neighbouring bars.
pub const BAR_PHASE_OFFSET: f64 = 0.1;

/// Write one animation frame: bar `i` becomes `|sin(phase + 0.1 * i)|`.
pub fn sine_frame(series: &BarSeries, phase: f64) {
    for i in 0..series.len() {
        series.set_value(i, (phase + BAR_PHASE_OFFSET * i as f64).sin().abs());
    }
}

/// Spawn a thread that writes a sine frame every `interval`, then calls `on_frame` so the
/// owner can schedule a refresh. Runs until `stop` is set.
pub fn spawn_sine_driver<F>(
    series: Arc<BarSeries>,
    interval: Duration,
    stop: Arc<AtomicBool>,
    mut on_frame: F,
) -> JoinHandle<()>
where
    F: FnMut() + Send + 'static,
{
    thread::spawn(move || {
        let mut phase = 0.0;
        while !stop.load(Ordering::Relaxed) {
            sine_frame(&series, phase);
            on_frame();
            phase += PHASE_STEP;
            thread::sleep(interval);
        }
        log::debug!("sine driver stopped after phase {phase:.1}");
    })
}
