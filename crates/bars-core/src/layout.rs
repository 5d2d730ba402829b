// File: crates/bars-core/src/layout.rs
// Summary: Layout pass mapping bar values to rectangles, fills and percentage labels.

use std::fmt;

use crate::color::{Color, ColorFn};
use crate::geometry::{Pos, Rect, Size};
use crate::series::BarSeries;
use crate::theme::Theme;
use crate::types::{DEFAULT_BAR_HEIGHT, DEFAULT_BAR_SPACING, DEFAULT_BAR_WIDTH, LABEL_SIZE_RATIO};

/// Style knobs read on every layout pass. Nothing here is validated.
#[derive(Clone)]
pub struct BarStyle {
    pub bar_min_size: Size,
    pub spacing: f32,
    /// Foreground fill per value; `theme.primary` when unset.
    pub color_fn: Option<ColorFn>,
    pub show_percent: bool,
    pub theme: Theme,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bar_min_size: Size::new(DEFAULT_BAR_WIDTH, DEFAULT_BAR_HEIGHT),
            spacing: DEFAULT_BAR_SPACING,
            color_fn: None,
            show_percent: false,
            theme: Theme::dark(),
        }
    }
}

impl fmt::Debug for BarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarStyle")
            .field("bar_min_size", &self.bar_min_size)
            .field("spacing", &self.spacing)
            .field("color_fn", &self.color_fn.as_ref().map(|_| "<fn>"))
            .field("show_percent", &self.show_percent)
            .field("theme", &self.theme.name)
            .finish()
    }
}

impl BarStyle {
    /// Fill for a bar holding `value`.
    pub fn fill_for(&self, value: f64) -> Color {
        match &self.color_fn {
            Some(f) => f(value),
            None => self.theme.primary,
        }
    }
}

/// Percentage text drawn over a bar, centered on `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub text_size: f32,
    pub center: Pos,
    pub color: Color,
}

/// Geometry of one bar after a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub value: f64,
    pub background: Rect,
    pub background_color: Color,
    pub foreground: Rect,
    pub fill: Color,
    pub label: Option<Label>,
}

/// Smallest size that fits `n` bars of the minimum width plus the gaps between them.
pub fn min_size(n: usize, style: &BarStyle) -> Size {
    let n = n as f32;
    let width = (style.bar_min_size.width * n) + (style.spacing * (n - 1.0));
    Size::new(width, style.bar_min_size.height)
}

/// Width of every bar: the container split `n` ways, minus a gap, with the gap that the
/// last bar does not need shared back across all bars.
pub fn bar_width(container_width: f32, n: usize, spacing: f32) -> f32 {
    let n = n as f32;
    ((container_width / n) - spacing) + (spacing / n)
}

/// Integer percentage, truncated toward zero: 0.256 -> "25%".
pub fn percent_label(value: f64) -> String {
    format!("{}%", (value * 100.0) as i64)
}

/// Lay out one bar at `index` holding `value`.
pub fn layout_bar(index: usize, value: f64, width: f32, container: Size, style: &BarStyle) -> Bar {
    let split = container.height * value as f32;
    let x = (width + style.spacing) * index as f32;

    let background = Rect::from_xywh(x, 0.0, width, container.height - split);
    let foreground = Rect::from_xywh(x, container.height - split, width, split);

    let label = style.show_percent.then(|| Label {
        text: percent_label(value),
        text_size: width * LABEL_SIZE_RATIO,
        center: Pos::new(x + width * 0.5, container.height * 0.5),
        color: style.theme.foreground,
    });

    Bar {
        index,
        value,
        background,
        background_color: style.theme.input_background,
        foreground,
        fill: style.fill_for(value),
        label,
    }
}

/// Full layout pass. Each bar's value is read under its own lock acquisition, so a
/// concurrent writer may be visible on some bars and not on others.
pub fn layout_bars(series: &BarSeries, style: &BarStyle, container: Size) -> Vec<Bar> {
    let n = series.len();
    let width = bar_width(container.width, n, style.spacing);
    (0..n)
        .map(|i| layout_bar(i, series.value(i), width, container, style))
        .collect()
}
