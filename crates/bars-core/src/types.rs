// File: crates/bars-core/src/types.rs
// Summary: Shared defaults for bar sizing and spacing.

/// Default minimum width of a single bar, in pixels.
pub const DEFAULT_BAR_WIDTH: f32 = 20.0;
/// Default minimum height of the chart, in pixels.
pub const DEFAULT_BAR_HEIGHT: f32 = 100.0;
/// Default gap between neighbouring bars, in pixels.
pub const DEFAULT_BAR_SPACING: f32 = 10.0;

/// Label text size as a fraction of the bar width.
pub const LABEL_SIZE_RATIO: f32 = 0.3;
