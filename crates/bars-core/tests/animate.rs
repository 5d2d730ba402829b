// File: crates/bars-core/tests/animate.rs
// Purpose: Validate the sine animation frame and the background driver lifecycle.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bars_core::animate::{sine_frame, spawn_sine_driver};
use bars_core::BarSeries;

#[test]
fn sine_frame_offsets_bars() {
    let s = BarSeries::new(3).unwrap();
    sine_frame(&s, 1.0);
    for i in 0..3 {
        let want = (1.0 + 0.1 * i as f64).sin().abs();
        assert_eq!(s.value(i), want);
    }
}

#[test]
fn sine_frame_stays_normalized() {
    let s = BarSeries::new(13).unwrap();
    for k in 0..100 {
        sine_frame(&s, k as f64 * 0.1);
        assert!((0..13).all(|i| (0.0..=1.0).contains(&s.value(i))));
    }
}

#[test]
fn driver_ticks_until_stopped() {
    let series = Arc::new(BarSeries::new(4).unwrap());
    let stop = Arc::new(AtomicBool::new(false));
    let ticks = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&ticks);
    let handle = spawn_sine_driver(Arc::clone(&series), Duration::from_millis(1), Arc::clone(&stop), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    while ticks.load(Ordering::SeqCst) < 3 {
        std::thread::sleep(Duration::from_millis(1));
    }
    stop.store(true, Ordering::SeqCst);
    handle.join().expect("driver thread");

    let after = ticks.load(Ordering::SeqCst);
    assert!(after >= 3);
    // sin(phase + 0.3) is nonzero from the first frame on
    assert!(series.value(3) > 0.0);
}
