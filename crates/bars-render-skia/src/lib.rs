// File: crates/bars-render-skia/src/lib.rs
// Summary: Skia host crate; stacks bar charts into frames and rasterizes them.

pub mod frame;
pub mod raster;
pub mod text;

pub use frame::Frame;
pub use raster::SkiaRenderer;
pub use text::TextShaper;
