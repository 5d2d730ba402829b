// File: crates/bars-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (f32 logical pixels).

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

impl Pos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
/// Height may come out negative when a bar value lies outside [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f32 { self.x + self.width }
    /// Shift by `origin`, used when a host places the widget inside a larger surface.
    pub fn translate(&self, origin: Pos) -> Self {
        Self::from_xywh(self.x + origin.x, self.y + origin.y, self.width, self.height)
    }
}
