// File: crates/bars-render-skia/src/frame.rs
// Summary: Vertical stack of bar charts sharing one raster surface.

use bars_core::{BarChart, Pos, Size, WidgetRenderer};

/// Default gap between stacked charts, in pixels.
pub const DEFAULT_GAP: f32 = 4.0;

/// Charts laid out top to bottom, each at the full frame width and its own minimum height.
pub struct Frame {
    charts: Vec<BarChart>,
    origins: Vec<Pos>,
    size: Size,
    pub gap: f32,
}

impl Default for Frame {
    fn default() -> Self { Self::new() }
}

impl Frame {
    pub fn new() -> Self {
        Self { charts: Vec::new(), origins: Vec::new(), size: Size::default(), gap: DEFAULT_GAP }
    }

    pub fn push(&mut self, chart: BarChart) {
        self.charts.push(chart);
    }

    pub fn charts(&self) -> &[BarChart] { &self.charts }

    /// Widest chart minimum by the summed chart heights and gaps.
    pub fn min_size(&self) -> Size {
        let width = self.charts.iter().map(|c| c.min_size().width).fold(0.0, f32::max);
        let heights: f32 = self.charts.iter().map(|c| c.min_size().height).sum();
        let gaps = self.gap * self.charts.len().saturating_sub(1) as f32;
        Size::new(width, heights + gaps)
    }

    /// Allocate `width` (grown to the minimum if needed) and resize every chart.
    /// Returns the frame size.
    pub fn layout(&mut self, width: f32) -> Size {
        let min = self.min_size();
        let width = width.max(min.width);
        self.origins.clear();
        let mut y = 0.0;
        for chart in &mut self.charts {
            let h = chart.min_size().height;
            self.origins.push(Pos::new(0.0, y));
            chart.resize(Size::new(width, h));
            y += h + self.gap;
        }
        self.size = Size::new(width, min.height);
        self.size
    }

    /// Refresh every chart at its current allocation.
    pub fn refresh(&mut self) {
        for chart in &mut self.charts {
            chart.refresh();
        }
    }

    /// Size from the last [`Frame::layout`].
    pub fn size(&self) -> Size { self.size }

    /// Charts with their top-left corner in frame coordinates.
    pub fn placements(&self) -> impl Iterator<Item = (Pos, &BarChart)> + '_ {
        self.origins.iter().copied().zip(self.charts.iter())
    }
}
