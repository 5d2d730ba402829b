// File: crates/bars-core/src/renderer.rs
// Summary: Render contract between a widget and its host, plus the drawable primitives.

use crate::color::Color;
use crate::geometry::{Rect, Size};
use crate::layout::Label;

/// Drawable primitive handed to a host compositor.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasObject {
    Rectangle { rect: Rect, color: Color },
    Text(Label),
}

/// What a host needs from a widget: a minimum size, a layout pass for an allocated size,
/// and the primitives to composite afterwards.
pub trait WidgetRenderer {
    fn min_size(&self) -> Size;
    fn layout(&mut self, size: Size);
    /// Lay out again at the last allocated size.
    fn refresh(&mut self);
    fn objects(&self) -> &[CanvasObject];
    /// Release cached primitives.
    fn destroy(&mut self) {}
}
