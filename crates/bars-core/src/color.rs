// File: crates/bars-core/src/color.rs
// Summary: ARGB color value and pluggable value-to-color mapping.

use std::sync::Arc;

/// 8-bit ARGB color, laid out like the host rasterizer expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::from_rgb(0xcc, 0, 0);
    pub const YELLOW: Color = Color::from_rgb(0xcc, 0xcc, 0);
    pub const GREEN: Color = Color::from_rgb(0, 0xcc, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
    /// Packed `0xAARRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Maps a bar value to its foreground fill.
pub type ColorFn = Arc<dyn Fn(f64) -> Color + Send + Sync>;

/// Build a [`ColorFn`] from ascending `(threshold, color)` stops.
/// A value takes the color of the first stop whose threshold is greater than it,
/// and `otherwise` when no stop matches.
///
/// ```
/// use bars_core::{threshold_colors, Color};
/// let traffic = threshold_colors(vec![(0.3, Color::RED), (0.6, Color::YELLOW)], Color::GREEN);
/// assert_eq!(traffic(0.1), Color::RED);
/// assert_eq!(traffic(0.7), Color::GREEN);
/// ```
pub fn threshold_colors(stops: Vec<(f64, Color)>, otherwise: Color) -> ColorFn {
    Arc::new(move |v| {
        stops
            .iter()
            .find(|(threshold, _)| v < *threshold)
            .map(|&(_, c)| c)
            .unwrap_or(otherwise)
    })
}
