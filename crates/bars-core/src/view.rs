// File: crates/bars-core/src/view.rs
// Summary: Bar chart widget: shared series, style, allocated size and cached primitives.

use std::sync::Arc;

use crate::color::ColorFn;
use crate::error::BarsError;
use crate::geometry::Size;
use crate::layout::{self, Bar, BarStyle};
use crate::renderer::{CanvasObject, WidgetRenderer};
use crate::series::BarSeries;
use crate::theme::Theme;

/// Bar chart view. Drivers mutate [`BarChart::series`] from any thread and then call
/// [`WidgetRenderer::refresh`] on the thread that owns the view; nothing refreshes on its own.
#[derive(Debug)]
pub struct BarChart {
    pub style: BarStyle,
    series: Arc<BarSeries>,
    size: Size,
    bars: Vec<Bar>,
    objects: Vec<CanvasObject>,
}

impl BarChart {
    /// Chart with `n` bars at 0.0 and default style.
    pub fn new(n: usize) -> Result<Self, BarsError> {
        Ok(Self::with_series(Arc::new(BarSeries::new(n)?)))
    }

    pub fn with_series(series: Arc<BarSeries>) -> Self {
        log::debug!("bar chart created with {} bars", series.len());
        Self {
            style: BarStyle::default(),
            series,
            size: Size::default(),
            bars: Vec::new(),
            objects: Vec::new(),
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.style.spacing = spacing;
        self
    }

    pub fn with_bar_min_size(mut self, size: Size) -> Self {
        self.style.bar_min_size = size;
        self
    }

    pub fn with_color_fn(mut self, f: ColorFn) -> Self {
        self.style.color_fn = Some(f);
        self
    }

    pub fn with_percent_labels(mut self, show: bool) -> Self {
        self.style.show_percent = show;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.style.theme = theme;
        self
    }

    /// Shared handle for drivers on other threads.
    pub fn series(&self) -> &Arc<BarSeries> { &self.series }

    /// See [`BarSeries::set_value`].
    pub fn set_value(&self, i: usize, v: f64) { self.series.set_value(i, v) }

    /// See [`BarSeries::value`].
    pub fn value(&self, i: usize) -> f64 { self.series.value(i) }

    /// Size last allocated by the host.
    pub fn size(&self) -> Size { self.size }

    /// Record a new allocation and lay out for it.
    pub fn resize(&mut self, size: Size) {
        if size != self.size {
            log::debug!("bar chart resized to {}x{}", size.width, size.height);
        }
        self.size = size;
        self.layout(size);
    }

    /// Per-bar geometry from the last layout pass.
    pub fn bars(&self) -> &[Bar] { &self.bars }
}

impl WidgetRenderer for BarChart {
    fn min_size(&self) -> Size {
        layout::min_size(self.series.len(), &self.style)
    }

    fn layout(&mut self, size: Size) {
        self.bars = layout::layout_bars(&self.series, &self.style, size);
        self.objects.clear();
        for bar in &self.bars {
            self.objects.push(CanvasObject::Rectangle { rect: bar.background, color: bar.background_color });
            self.objects.push(CanvasObject::Rectangle { rect: bar.foreground, color: bar.fill });
            if let Some(label) = &bar.label {
                self.objects.push(CanvasObject::Text(label.clone()));
            }
        }
        log::trace!("laid out {} bars in {}x{}", self.bars.len(), size.width, size.height);
    }

    fn refresh(&mut self) {
        self.layout(self.size);
    }

    fn objects(&self) -> &[CanvasObject] { &self.objects }

    fn destroy(&mut self) {
        self.bars.clear();
        self.objects.clear();
    }
}
