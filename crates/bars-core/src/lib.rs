// File: crates/bars-core/src/lib.rs
// Summary: Core library entry point; exports the bar series, chart view and render contract.

pub mod animate;
pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod renderer;
pub mod series;
pub mod theme;
pub mod types;
pub mod view;

pub use color::{threshold_colors, Color, ColorFn};
pub use error::BarsError;
pub use geometry::{Pos, Rect, Size};
pub use layout::{Bar, BarStyle, Label};
pub use renderer::{CanvasObject, WidgetRenderer};
pub use series::BarSeries;
pub use theme::Theme;
pub use view::BarChart;
